use core::borrow::Borrow;
use core::cell::Cell;
use core::cmp::Ordering::{Equal, Greater, Less};

use super::arena::NodeArena;
use super::balance::{exceeds_depth_bound, find_scapegoat, subtree_size};
use super::handle::Handle;
use super::node::{Node, Side};
use super::rebuild::rebuild;
use crate::error::ConstraintError;
use crate::stats::Stats;

/// The scapegoat tree backing `ScapegoatTree`.
pub(crate) struct RawScapegoatTree<T> {
    /// Arena owning every node.
    nodes: NodeArena<T>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Depth balance factor, always greater than zero.
    alpha: f64,
    /// Number of keys in the tree.
    n: usize,
    /// Largest `n` since the last full rebuild.
    q: usize,
    /// Every counter except searches.
    stats: Stats,
    /// Searches take `&self`, so their counter lives apart.
    searches: Cell<u64>,
}

impl<T> RawScapegoatTree<T> {
    /// Creates an empty tree. `alpha` must already be validated.
    pub(crate) const fn new(alpha: f64) -> Self {
        Self::from_arena(NodeArena::new(), alpha)
    }

    /// Creates an empty tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(alpha: f64, capacity: usize) -> Self {
        Self::from_arena(NodeArena::with_capacity(capacity), alpha)
    }

    const fn from_arena(nodes: NodeArena<T>, alpha: f64) -> Self {
        Self {
            nodes,
            root: None,
            alpha,
            n: 0,
            q: 0,
            stats: Stats {
                total_rebalances: 0,
                rebalances_after_insert: 0,
                rebalances_after_remove: 0,
                total_inserts: 0,
                total_removals: 0,
                total_searches: 0,
            },
            searches: Cell::new(0),
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.n
    }

    pub(crate) const fn high_water_mark(&self) -> usize {
        self.q
    }

    pub(crate) const fn alpha(&self) -> f64 {
        self.alpha
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn stats(&self) -> Stats {
        Stats {
            total_searches: self.searches.get(),
            ..self.stats
        }
    }

    /// Puts `new` where `old` hung below `parent`, or at the root when `parent` is `None`.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            Some(parent) => {
                let side = self
                    .nodes
                    .get(parent)
                    .side_of(old)
                    .expect("`RawScapegoatTree::replace_child()` - `old` is not a child of `parent`!");
                self.nodes.attach(parent, side, new);
            }
            None => {
                self.root = new;
                if let Some(new) = new {
                    self.nodes.get_mut(new).set_parent(None);
                }
            }
        }
    }

    /// Rebuilds the subtree under `root` and splices the result back where `root` hung.
    fn rebalance(&mut self, root: Option<Handle>) {
        self.stats.total_rebalances += 1;
        let Some(old) = root else {
            return;
        };
        let parent = self.nodes.get(old).parent();
        let rebuilt = rebuild(&mut self.nodes, root);
        if rebuilt != root {
            self.replace_child(parent, old, rebuilt);
        }
    }

    /// Unlinks a node with at most one child, lifting that child into its place.
    fn detach(&mut self, handle: Handle) -> Node<T> {
        let node = self.nodes.get(handle);
        debug_assert!(node.both_children().is_none(), "`RawScapegoatTree::detach()` - node has two children!");
        let (parent, child) = (node.parent(), node.only_child());
        self.replace_child(parent, handle, child);
        self.nodes.take(handle)
    }
}

impl<T: Ord> RawScapegoatTree<T> {
    /// Finds the node holding `key`. Does not count as a search.
    fn find<Q>(&self, key: &Q) -> Option<Handle>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match key.cmp(node.key().borrow()) {
                Less => node.left(),
                Greater => node.right(),
                Equal => return Some(handle),
            };
        }
        None
    }

    /// Returns true if the tree holds `key`, counting the call as a search.
    pub(crate) fn search<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.searches.set(self.searches.get() + 1);
        self.find(key).is_some()
    }

    /// Inserts `key` unless it is already present. Returns whether it was inserted.
    pub(crate) fn insert(&mut self, key: T) -> Result<bool, ConstraintError> {
        if self.find(&key).is_some() {
            return Ok(false);
        }

        // Descend to the empty link the key belongs in, counting edges.
        let mut depth = 0;
        let mut slot = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            let side = if key < *node.key() { Side::Left } else { Side::Right };
            slot = Some((handle, side));
            current = node.child(side);
            depth += 1;
        }

        let inserted = self.nodes.alloc(Node::leaf(key, None));
        match slot {
            Some((parent, side)) => self.nodes.attach(parent, side, Some(inserted)),
            None => self.root = Some(inserted),
        }
        self.stats.total_inserts += 1;
        self.n += 1;
        self.q += 1;

        if exceeds_depth_bound(depth, self.q, self.alpha) {
            let Some(scapegoat) = find_scapegoat(&self.nodes, inserted) else {
                return Ok(true);
            };
            let size = subtree_size(&self.nodes, Some(scapegoat));
            self.stats.rebalances_after_insert += 1;
            self.rebalance(Some(scapegoat));
            log::debug!(
                "insert at depth {depth} rebuilt a subtree of {size} nodes (n = {}, q = {})",
                self.n,
                self.q
            );

            if !(self.q / 2 <= self.n && self.n <= self.q) {
                log::error!("size constraint violated after rebuild (n = {}, q = {})", self.n, self.q);
                return Err(ConstraintError::new(self.n, self.q));
            }
        }

        self.validate();
        Ok(true)
    }

    /// Removes `key` if present. Returns whether it was removed.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let Some(target) = self.find(key) else {
            return false;
        };

        match self.nodes.get(target).both_children() {
            Some((_, right)) => {
                // The in-order successor has no left child, so it comes out directly and its key
                // takes the place of the one being removed.
                let successor = self.nodes.leftmost(right);
                let successor = self.detach(successor).into_key();
                self.nodes.get_mut(target).replace_key(successor);
            }
            None => {
                self.detach(target);
            }
        }
        self.stats.total_removals += 1;
        self.n -= 1;

        if self.n <= self.q / 2 {
            self.stats.rebalances_after_remove += 1;
            self.rebalance(self.root);
            log::debug!("remove rebuilt the whole tree (n = {}, q was {})", self.n, self.q);
            self.q = self.n;
        }

        self.validate();
        true
    }

    /// Re-checks every structural invariant, panicking on the first violation.
    #[cfg(any(test, feature = "full_validation"))]
    pub(crate) fn validate(&self) {
        use super::rebuild::flatten;

        assert!(self.n <= self.q, "n = {} exceeds q = {}", self.n, self.q);
        assert_eq!(self.nodes.len(), self.n, "arena holds {} nodes, n = {}", self.nodes.len(), self.n);

        if let Some(root) = self.root {
            assert_eq!(self.nodes.get(root).parent(), None, "root has a parent");
        }

        let sorted = flatten(&self.nodes, self.root);
        assert_eq!(sorted.len(), self.n, "tree reaches {} nodes, n = {}", sorted.len(), self.n);
        for pair in sorted.windows(2) {
            assert!(
                self.nodes.get(pair[0]).key() < self.nodes.get(pair[1]).key(),
                "keys out of order"
            );
        }
        for &handle in &sorted {
            let node = self.nodes.get(handle);
            for child in [node.left(), node.right()].into_iter().flatten() {
                assert_eq!(self.nodes.get(child).parent(), Some(handle), "stale parent link");
            }
        }
    }

    #[cfg(not(any(test, feature = "full_validation")))]
    #[inline]
    #[allow(clippy::unused_self)]
    pub(crate) fn validate(&self) {}
}
