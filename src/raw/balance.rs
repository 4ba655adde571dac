//! Imbalance detection: subtree weights, the insertion depth bound and the scapegoat walk.
//!
//! Nodes carry no weights, so every size here is counted from scratch.

use num_traits::float::Float;
use smallvec::SmallVec;

use super::arena::NodeArena;
use super::handle::Handle;

/// A child whose subtree holds more than `WEIGHT_NUMERATOR / WEIGHT_DENOMINATOR` of its
/// parent's subtree is too heavy. This ratio is fixed and does not follow the tree's `alpha`.
pub(crate) const WEIGHT_NUMERATOR: usize = 2;
pub(crate) const WEIGHT_DENOMINATOR: usize = 3;

/// Explicit traversal stack; deep enough for any balanced subtree without spilling.
pub(crate) type Stack = SmallVec<[Handle; 32]>;

/// Counts `root` and all of its descendants. An absent subtree has size zero.
pub(crate) fn subtree_size<T>(nodes: &NodeArena<T>, root: Option<Handle>) -> usize {
    let mut stack: Stack = root.into_iter().collect();
    let mut size = 0;

    while let Some(handle) = stack.pop() {
        size += 1;
        let node = nodes.get(handle);
        stack.extend(node.left());
        stack.extend(node.right());
    }

    size
}

/// Returns true when a node inserted `depth` edges below the root sits deeper than
/// `log(q) / log(alpha)`.
pub(crate) fn exceeds_depth_bound(depth: usize, q: usize, alpha: f64) -> bool {
    #[allow(clippy::cast_precision_loss)]
    let (depth, q) = (depth as f64, q as f64);
    let threshold = Float::ln(q) / Float::ln(alpha);
    log::trace!("insert depth {depth} against threshold {threshold} (q = {q}, alpha = {alpha})");
    depth > threshold
}

/// Walks upward from the freshly inserted node `start` while each node's subtree is within
/// the fixed weight ratio of its parent's, and returns the first node that is not.
///
/// The root has no parent to weigh against, so the walk stops there at the latest. Returns
/// `None` only when `start` itself is the root.
pub(crate) fn find_scapegoat<T>(nodes: &NodeArena<T>, start: Handle) -> Option<Handle> {
    let mut parent = nodes.get(start).parent()?;
    let mut current = start;
    let mut current_size = subtree_size(nodes, Some(current));

    loop {
        let parent_size = subtree_size(nodes, Some(parent));
        if WEIGHT_DENOMINATOR * current_size > WEIGHT_NUMERATOR * parent_size {
            return Some(current);
        }

        current = parent;
        current_size = parent_size;
        match nodes.get(current).parent() {
            Some(above) => parent = above,
            None => return Some(current),
        }
    }
}
