use super::handle::Handle;

/// Which child link of a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A single tree cell: one key and three links.
///
/// Children are owned through the arena the node lives in; `parent` is only a back-reference
/// for walking upward and is rewritten whenever the node moves.
pub(crate) struct Node<T> {
    key: T,
    left: Option<Handle>,
    right: Option<Handle>,
    parent: Option<Handle>,
}

impl<T> Node<T> {
    /// Creates a childless node hanging below `parent`.
    pub(crate) const fn leaf(key: T, parent: Option<Handle>) -> Self {
        Self {
            key,
            left: None,
            right: None,
            parent,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &T {
        &self.key
    }

    /// Swaps in a new key and returns the old one.
    pub(crate) fn replace_key(&mut self, key: T) -> T {
        core::mem::replace(&mut self.key, key)
    }

    pub(crate) fn into_key(self) -> T {
        self.key
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn parent(&self) -> Option<Handle> {
        self.parent
    }

    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }

    /// Which side `child` hangs on, if it is a child of this node at all.
    pub(crate) fn side_of(&self, child: Handle) -> Option<Side> {
        if self.left == Some(child) {
            Some(Side::Left)
        } else if self.right == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Both children, when the node has two.
    pub(crate) const fn both_children(&self) -> Option<(Handle, Handle)> {
        match (self.left, self.right) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => None,
        }
    }

    /// The child of a node known to have at most one.
    pub(crate) const fn only_child(&self) -> Option<Handle> {
        match self.left {
            Some(left) => Some(left),
            None => self.right,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn leaf_has_no_children() {
        let node = Node::leaf(7, Some(Handle::from_slot(3)));
        assert_eq!(*node.key(), 7);
        assert_eq!(node.left(), None);
        assert_eq!(node.right(), None);
        assert_eq!(node.parent(), Some(Handle::from_slot(3)));
        assert_eq!(node.only_child(), None);
        assert_eq!(node.both_children(), None);
    }

    #[test]
    fn child_links_by_side() {
        let (a, b) = (Handle::from_slot(1), Handle::from_slot(2));
        let mut node = Node::leaf("k", None);

        node.set_child(Side::Right, Some(b));
        assert_eq!(node.only_child(), Some(b));
        assert_eq!(node.side_of(b), Some(Side::Right));
        assert_eq!(node.side_of(a), None);

        node.set_child(Side::Left, Some(a));
        assert_eq!(node.child(Side::Left), Some(a));
        assert_eq!(node.both_children(), Some((a, b)));

        node.set_child(Side::Left, None);
        node.set_child(Side::Right, None);
        assert_eq!(node.both_children(), None);
        assert_eq!(node.only_child(), None);
    }

    #[test]
    fn replace_key_returns_old() {
        let mut node = Node::leaf(1, None);
        assert_eq!(node.replace_key(2), 1);
        assert_eq!(node.into_key(), 2);
    }
}
