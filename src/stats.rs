/// Operation counters for a single [`ScapegoatTree`](crate::ScapegoatTree).
///
/// Counters only ever grow; they are reset only by building a new tree. Inserting a key that is
/// already present and removing a key that is absent leave every counter untouched.
///
/// # Examples
///
/// ```
/// use goat_tree::{ScapegoatTree, Stats};
///
/// let mut tree = ScapegoatTree::default();
/// tree.insert(1).unwrap();
/// tree.insert(1).unwrap();
/// assert!(tree.search(&1));
///
/// assert_eq!(
///     tree.stats(),
///     Stats { total_inserts: 1, total_searches: 1, ..Stats::default() }
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Stats {
    /// Subtree rebuilds of any kind.
    pub total_rebalances: u64,
    /// Partial rebuilds triggered by an insertion landing too deep.
    pub rebalances_after_insert: u64,
    /// Full rebuilds triggered by removals shrinking the tree to half its high-water mark.
    pub rebalances_after_remove: u64,
    /// Keys actually inserted.
    pub total_inserts: u64,
    /// Keys actually removed.
    pub total_removals: u64,
    /// Calls to [`ScapegoatTree::search`](crate::ScapegoatTree::search).
    pub total_searches: u64,
}
