//! Rebuilding a subtree into a perfectly balanced one.
//!
//! The nodes of the old subtree are reused in place: flattening collects their handles in key
//! order and building only rewrites links, so no key is moved or cloned.

use alloc::vec::Vec;

use super::arena::NodeArena;
use super::balance::Stack;
use super::handle::Handle;
use super::node::Side;

/// Collects every node of the subtree under `root` in ascending key order.
pub(crate) fn flatten<T>(nodes: &NodeArena<T>, root: Option<Handle>) -> Vec<Handle> {
    let mut sorted = Vec::new();
    let mut stack = Stack::new();
    let mut current = root;

    loop {
        while let Some(handle) = current {
            stack.push(handle);
            current = nodes.get(handle).left();
        }
        let Some(handle) = stack.pop() else {
            break;
        };
        sorted.push(handle);
        current = nodes.get(handle).right();
    }

    sorted
}

/// Links the nodes of `sorted` into a balanced tree hanging below `parent` and returns its root.
///
/// The lower middle element of every range becomes the root of that range, so the result has
/// the minimum possible height for `sorted.len()` nodes. Recursion depth is that height.
pub(crate) fn build_from_sorted<T>(
    nodes: &mut NodeArena<T>,
    sorted: &[Handle],
    parent: Option<Handle>,
) -> Option<Handle> {
    if sorted.is_empty() {
        return None;
    }

    let mid = (sorted.len() - 1) / 2;
    let root = sorted[mid];
    let left = build_from_sorted(nodes, &sorted[..mid], Some(root));
    let right = build_from_sorted(nodes, &sorted[mid + 1..], Some(root));

    let node = nodes.get_mut(root);
    node.set_parent(parent);
    node.set_child(Side::Left, left);
    node.set_child(Side::Right, right);
    Some(root)
}

/// Rebuilds the subtree under `root` and returns the new subtree root, whose parent link is the
/// old root's. Splicing it into that parent is left to the caller.
pub(crate) fn rebuild<T>(nodes: &mut NodeArena<T>, root: Option<Handle>) -> Option<Handle> {
    let parent = root.and_then(|root| nodes.get(root).parent());
    let sorted = flatten(nodes, root);
    build_from_sorted(nodes, &sorted, parent)
}
