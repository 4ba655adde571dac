//! Scapegoat tree ordered set for Rust.
//!
//! This crate provides [`ScapegoatTree`], an ordered set backed by a scapegoat tree: a binary
//! search tree that stores no balance metadata in its nodes (no heights, colors or balance
//! factors). Instead it counts insertions since the last full rebuild and, when an insertion
//! lands too deep, rebuilds the offending subtree into a perfectly balanced one.
//!
//! # Example
//!
//! ```
//! use goat_tree::ScapegoatTree;
//!
//! let mut tree = ScapegoatTree::new(1.5).unwrap();
//! for key in [42, 27, 3, 1, 2, 99, 55, 48, 39, 47, 46] {
//!     tree.insert(key).unwrap();
//! }
//!
//! assert!(tree.search(&46));
//! assert!(!tree.search(&7));
//! assert!(tree.remove(&27));
//! assert_eq!(tree.len(), 10);
//!
//! // One subtree was rebuilt while inserting.
//! let stats = tree.stats();
//! assert_eq!(stats.rebalances_after_insert, 1);
//! assert_eq!(stats.total_searches, 2);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **No per-node metadata** - Nodes hold a key and three links, nothing else
//! - **Amortized O(log n) updates** - Unbalanced subtrees are rebuilt wholesale
//! - **`full_validation`** - Optional feature that re-checks every invariant after each mutation
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to each other through compact handles, including a
//! non-owning parent handle used to walk upward from a freshly inserted node. Rebuilds reuse
//! the arena slots of the subtree being rebuilt, so keys are never cloned.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;
mod stats;

pub mod scapegoat_tree;

pub use error::{AlphaValueError, ConstraintError};
pub use scapegoat_tree::{DEFAULT_ALPHA, ScapegoatTree};
pub use stats::Stats;
