use core::borrow::Borrow;
use core::fmt;

use crate::raw::RawScapegoatTree;
use crate::{AlphaValueError, ConstraintError, Stats};

mod capacity;

/// The `alpha` used by [`ScapegoatTree::default`].
pub const DEFAULT_ALPHA: f64 = 1.5;

/// An ordered set based on a scapegoat tree.
///
/// A scapegoat tree is a plain binary search tree whose nodes carry nothing but a key and their
/// links. Balance is restored lazily: an insertion that lands deeper than `log(q) / log(alpha)`
/// edges, where `q` is the largest size the tree has reached since it was last fully rebuilt,
/// walks back up to the first ancestor whose subtree outweighs two thirds of its parent's and
/// rebuilds that subtree perfectly balanced. Removals never restructure locally; once the tree
/// shrinks to half of `q` the whole tree is rebuilt.
///
/// `alpha` tunes how deep a path may grow before a rebuild: the closer it is to `1.0` the more
/// depth is tolerated. It must be greater than zero.
///
/// It is a logic error for a key to be modified in such a way that its ordering relative to any
/// other key, as determined by the [`Ord`] trait, changes while it is in the set. The behavior
/// resulting from such a logic error is not specified, but will be encapsulated to the
/// `ScapegoatTree` that observed the logic error and not result in undefined behavior.
///
/// The tree is not [`Sync`]: [`search`](Self::search) takes `&self` and still updates the search
/// counter. Share it across threads behind a lock that serializes every call.
///
/// # Examples
///
/// ```
/// use goat_tree::ScapegoatTree;
///
/// let mut books = ScapegoatTree::new(1.5).unwrap();
///
/// books.insert("A Dance With Dragons").unwrap();
/// books.insert("To Kill a Mockingbird").unwrap();
/// books.insert("The Odyssey").unwrap();
/// books.insert("The Great Gatsby").unwrap();
///
/// if !books.search("The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.", books.len());
/// }
///
/// assert!(books.remove("The Odyssey"));
/// assert_eq!(books.len(), 3);
/// ```
pub struct ScapegoatTree<T> {
    raw: RawScapegoatTree<T>,
}

impl<T> ScapegoatTree<T> {
    /// Makes a new, empty `ScapegoatTree` with the given `alpha`.
    ///
    /// # Errors
    ///
    /// Returns [`AlphaValueError`] unless `alpha > 0.0`. `NaN` is rejected too.
    ///
    /// # Examples
    ///
    /// ```
    /// use goat_tree::ScapegoatTree;
    ///
    /// assert!(ScapegoatTree::<u32>::new(1.5).is_ok());
    /// assert!(ScapegoatTree::<u32>::new(0.0).is_err());
    /// assert!(ScapegoatTree::<u32>::new(-0.1).is_err());
    /// ```
    pub fn new(alpha: f64) -> Result<Self, AlphaValueError> {
        validate_alpha(alpha)?;
        Ok(ScapegoatTree {
            raw: RawScapegoatTree::new(alpha),
        })
    }

    /// Returns the number of keys in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use goat_tree::ScapegoatTree;
    ///
    /// let mut tree = ScapegoatTree::default();
    /// assert_eq!(tree.len(), 0);
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the set contains no keys.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the `alpha` the tree was built with.
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.raw.alpha()
    }

    /// Returns the largest [`len`](Self::len) reached since the tree was last fully rebuilt.
    ///
    /// This is the `q` of the depth bound `log(q) / log(alpha)`. It is never below `len()`,
    /// and a full rebuild resets it to `len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use goat_tree::ScapegoatTree;
    ///
    /// let mut tree = ScapegoatTree::default();
    /// for key in 0..4 {
    ///     tree.insert(key).unwrap();
    /// }
    /// tree.remove(&0);
    /// assert_eq!(tree.high_water_mark(), 4);
    ///
    /// // Shrinking to half of the mark rebuilds the tree and resets the mark.
    /// tree.remove(&1);
    /// assert_eq!(tree.high_water_mark(), 2);
    /// ```
    #[must_use]
    pub const fn high_water_mark(&self) -> usize {
        self.raw.high_water_mark()
    }

    /// Returns a snapshot of the tree's operation counters.
    ///
    /// # Examples
    ///
    /// ```
    /// use goat_tree::ScapegoatTree;
    ///
    /// let mut tree = ScapegoatTree::default();
    /// for key in [42, 27, 3, 1, 2] {
    ///     tree.insert(key).unwrap();
    /// }
    ///
    /// let stats = tree.stats();
    /// assert_eq!(stats.total_inserts, 5);
    /// assert_eq!(stats.rebalances_after_insert, 1);
    /// ```
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.raw.stats()
    }
}

impl<T: Ord> ScapegoatTree<T> {
    /// Adds a key to the set.
    ///
    /// Returns `Ok(true)` if the key was added and `Ok(false)` if it was already present, in
    /// which case nothing changes, not even the counters.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError`] if the size bookkeeping is found inconsistent after a
    /// rebuild. This indicates a bug in the tree, never bad input.
    ///
    /// # Examples
    ///
    /// ```
    /// use goat_tree::ScapegoatTree;
    ///
    /// let mut tree = ScapegoatTree::default();
    /// assert_eq!(tree.insert(2), Ok(true));
    /// assert_eq!(tree.insert(2), Ok(false));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> Result<bool, ConstraintError> {
        self.raw.insert(key)
    }

    /// Removes a key from the set. Returns whether the key was present.
    ///
    /// The key may be any borrowed form of the set's key type, but the ordering on the borrowed
    /// form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use goat_tree::ScapegoatTree;
    ///
    /// let mut tree = ScapegoatTree::default();
    /// tree.insert(2).unwrap();
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key)
    }

    /// Returns `true` if the set contains the key. Every call counts toward
    /// [`Stats::total_searches`].
    ///
    /// The key may be any borrowed form of the set's key type, but the ordering on the borrowed
    /// form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use goat_tree::ScapegoatTree;
    ///
    /// let mut tree = ScapegoatTree::default();
    /// tree.insert(String::from("a")).unwrap();
    /// assert!(tree.search("a"));
    /// assert!(!tree.search("b"));
    /// assert_eq!(tree.stats().total_searches, 2);
    /// ```
    pub fn search<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(key)
    }
}

impl<T> Default for ScapegoatTree<T> {
    /// Creates an empty `ScapegoatTree` with [`DEFAULT_ALPHA`].
    fn default() -> ScapegoatTree<T> {
        ScapegoatTree {
            raw: RawScapegoatTree::new(DEFAULT_ALPHA),
        }
    }
}

impl<T> fmt::Debug for ScapegoatTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScapegoatTree")
            .field("alpha", &self.alpha())
            .field("len", &self.len())
            .field("high_water_mark", &self.high_water_mark())
            .field("stats", &self.stats())
            .finish()
    }
}

fn validate_alpha(alpha: f64) -> Result<(), AlphaValueError> {
    if alpha > 0.0 { Ok(()) } else { Err(AlphaValueError::new(alpha)) }
}
