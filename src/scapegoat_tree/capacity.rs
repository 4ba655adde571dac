use super::{ScapegoatTree, validate_alpha};
use crate::AlphaValueError;
use crate::raw::RawScapegoatTree;

impl<T> ScapegoatTree<T> {
    /// Creates an empty tree with room for at least `capacity` keys before it reallocates.
    ///
    /// # Errors
    ///
    /// Returns [`AlphaValueError`] unless `alpha > 0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use goat_tree::ScapegoatTree;
    ///
    /// let tree: ScapegoatTree<i32> = ScapegoatTree::with_capacity(1.5, 16).unwrap();
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    pub fn with_capacity(alpha: f64, capacity: usize) -> Result<Self, AlphaValueError> {
        validate_alpha(alpha)?;
        Ok(ScapegoatTree {
            raw: RawScapegoatTree::with_capacity(alpha, capacity),
        })
    }

    /// Returns how many keys the tree can hold without reallocating.
    ///
    /// Slots freed by removals are reused, so this only grows.
    ///
    /// # Examples
    ///
    /// ```
    /// use goat_tree::ScapegoatTree;
    ///
    /// let tree: ScapegoatTree<i32> = ScapegoatTree::with_capacity(1.5, 32).unwrap();
    /// assert_eq!(tree.capacity(), 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
