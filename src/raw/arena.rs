use alloc::vec::Vec;

use super::handle::Handle;
use super::node::{Node, Side};

/// Slot storage owning every node of a tree.
///
/// Freed slots are recycled before the backing vector grows, so a tree that shrinks and grows
/// again reuses its memory.
pub(crate) struct NodeArena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<Handle>,
}

impl<T> NodeArena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of live nodes.
    #[cfg(any(test, feature = "full_validation"))]
    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    pub(crate) fn alloc(&mut self, node: Node<T>) -> Handle {
        if let Some(handle) = self.free.pop() {
            self.slots[handle.slot()] = Some(node);
            handle
        } else {
            assert!(
                self.slots.len() <= Handle::MAX,
                "`NodeArena::alloc()` - arena is at maximum capacity ({})",
                Handle::MAX + 1
            );
            self.slots.push(Some(node));
            Handle::from_slot(self.slots.len() - 1)
        }
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &Node<T> {
        self.slots[handle.slot()].as_ref().expect("`NodeArena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut Node<T> {
        self.slots[handle.slot()].as_mut().expect("`NodeArena::get_mut()` - `handle` is invalid!")
    }

    /// Removes a node from the arena and hands it back. Links pointing at it are the caller's
    /// problem.
    pub(crate) fn take(&mut self, handle: Handle) -> Node<T> {
        let node = self.slots[handle.slot()].take().expect("`NodeArena::take()` - `handle` is invalid!");
        self.free.push(handle);
        node
    }

    /// Hangs `child` (or nothing) below `parent` on `side`, rewriting the child's parent link.
    pub(crate) fn attach(&mut self, parent: Handle, side: Side, child: Option<Handle>) {
        self.get_mut(parent).set_child(side, child);
        if let Some(child) = child {
            self.get_mut(child).set_parent(Some(parent));
        }
    }

    /// Follows left links down from `handle`.
    pub(crate) fn leftmost(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.get(handle).left() {
            handle = left;
        }
        handle
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn arena_capacity() {
        let arena: NodeArena<u32> = NodeArena::with_capacity(10);
        assert_eq!(arena.capacity(), 10);
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(Node::leaf(1, None));
        let b = arena.alloc(Node::leaf(2, None));
        assert_eq!(arena.take(a).into_key(), 1);
        assert_eq!(arena.len(), 1);

        let c = arena.alloc(Node::leaf(3, None));
        assert_eq!(c, a);
        assert_eq!(*arena.get(b).key(), 2);
        assert_eq!(*arena.get(c).key(), 3);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    #[should_panic(expected = "`NodeArena::get()` - `handle` is invalid!")]
    fn taken_handle_is_invalid() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(Node::leaf(1, None));
        arena.take(a);
        let _ = arena.get(a);
    }

    #[test]
    fn attach_links_both_ways() {
        let mut arena = NodeArena::new();
        let root = arena.alloc(Node::leaf(5, None));
        let left = arena.alloc(Node::leaf(3, None));
        let deeper = arena.alloc(Node::leaf(1, None));

        arena.attach(root, Side::Left, Some(left));
        arena.attach(left, Side::Left, Some(deeper));
        assert_eq!(arena.get(root).left(), Some(left));
        assert_eq!(arena.get(left).parent(), Some(root));
        assert_eq!(arena.get(deeper).parent(), Some(left));
        assert_eq!(arena.leftmost(root), deeper);

        arena.attach(root, Side::Left, None);
        assert_eq!(arena.get(root).left(), None);
        assert_eq!(arena.leftmost(root), root);
    }

    proptest! {
        #[test]
        fn arena_behaves_like_vec(operations in prop::collection::vec(strategy(), 0..256)) {
            let mut model: Vec<(Handle, u32)> = Vec::new();
            let mut arena: NodeArena<u32> = NodeArena::new();

            for operation in operations {
                match operation {
                    Operation::Alloc(key) => {
                        let handle = arena.alloc(Node::leaf(key, None));
                        model.push((handle, key));
                    }
                    Operation::Rekey(which, key) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        let handle = model[index].0;
                        let old = arena.get_mut(handle).replace_key(key);
                        prop_assert_eq!(old, model[index].1);
                        model[index].1 = key;
                    }
                    Operation::Take(which) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        let handle = model[index].0;
                        let key = arena.take(handle).into_key();
                        let (_, expected) = model.swap_remove(index);
                        prop_assert_eq!(key, expected);
                    }
                }

                prop_assert_eq!(arena.len(), model.len());

                for &(handle, key) in &model {
                    prop_assert_eq!(*arena.get(handle).key(), key);
                }
            }
        }
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Alloc(u32),
        Rekey(usize, u32),
        Take(usize),
    }

    fn strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            20 => any::<u32>().prop_map(Operation::Alloc),
            5 => (any::<usize>(), any::<u32>()).prop_map(|(which, key)| Operation::Rekey(which, key)),
            10 => any::<usize>().prop_map(Operation::Take),
        ]
    }
}
