//! Structural statistics tracking.

use std::fmt;

/// Counters for the structural events an insert can trigger.
///
/// The tree is single-threaded, so these are plain integers rather than
/// atomics; [`BPlusTree::stats`](crate::BPlusTree::stats) hands out a copy.
///
/// Every leaf split adds exactly one leaf, so on any tree
/// `leaf_count() == stats().leaf_splits + 1`, and every root split adds one
/// level, so `height() == stats().root_splits + 1`.
///
/// # Example
/// ```
/// use bplus_index::{BPlusTree, ORDER};
///
/// let mut tree = BPlusTree::new(ORDER).unwrap();
/// for key in [1, 2, 3, 4, 5, 5] {
///     tree.insert(key);
/// }
///
/// let stats = tree.stats();
/// assert_eq!(stats.leaf_splits, 1);
/// assert_eq!(stats.root_splits, 1);
/// assert_eq!(stats.duplicates_rejected, 1);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of overfull leaves that were split.
    pub leaf_splits: u64,

    /// Number of overfull internal nodes that were split.
    pub internal_splits: u64,

    /// Number of times a new root was created (tree height grew by one).
    pub root_splits: u64,

    /// Number of inserts ignored because the key was already present.
    pub duplicates_rejected: u64,
}

impl TreeStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leaf and internal splits combined.
    pub fn total_splits(&self) -> u64 {
        self.leaf_splits + self.internal_splits
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ leaf_splits: {}, internal_splits: {}, root_splits: {}, duplicates: {} }}",
            self.leaf_splits, self.internal_splits, self.root_splits, self.duplicates_rejected
        )
    }
}
