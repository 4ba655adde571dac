use thiserror::Error;

/// The error returned when a tree is constructed with an `alpha` that is not strictly positive.
///
/// # Examples
///
/// ```
/// use goat_tree::ScapegoatTree;
///
/// let err = ScapegoatTree::<i32>::new(-1.5).unwrap_err();
/// assert_eq!(err.alpha(), -1.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[error("alpha value must be greater than zero, got {alpha}")]
pub struct AlphaValueError {
    alpha: f64,
}

impl AlphaValueError {
    pub(crate) const fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    /// The rejected `alpha`.
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }
}

/// The error returned by [`ScapegoatTree::insert`](crate::ScapegoatTree::insert) when the size
/// counters no longer satisfy `q / 2 <= n <= q` after a rebuild.
///
/// A correct tree never produces this; seeing it means the tree's bookkeeping is broken and the
/// tree should not be used further.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("size constraint violated after rebuild: n = {n}, q = {q}")]
pub struct ConstraintError {
    n: usize,
    q: usize,
}

impl ConstraintError {
    pub(crate) const fn new(n: usize, q: usize) -> Self {
        Self { n, q }
    }

    /// The number of keys in the tree when the violation was detected.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.n
    }

    /// The high-water mark when the violation was detected.
    #[must_use]
    pub const fn high_water_mark(&self) -> usize {
        self.q
    }
}
