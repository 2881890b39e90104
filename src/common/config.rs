//! Configuration constants for the B+ tree index.

/// Tree order: the maximum number of children an internal node may have.
///
/// The order is architecturally fixed. All split arithmetic is written in
/// terms of this constant, so relaxing it later only means relaxing the
/// check in [`BPlusTree::new`](crate::BPlusTree::new).
///
/// # Node Capacity
/// With order 5:
/// - Max keys per node: 4
/// - Max children per internal node: 5
/// - Split point: 2 (left keeps 2 keys, right gets the rest)
pub const ORDER: usize = 5;

/// Maximum number of keys a node may hold once an operation has completed.
pub const MAX_KEYS: usize = ORDER - 1;

/// Maximum number of children of an internal node.
pub const MAX_CHILDREN: usize = ORDER;

/// Index at which an overfull node (holding `ORDER` keys) is split.
///
/// Leaves keep `[0, SPLIT_POINT)` and move `[SPLIT_POINT, ORDER)` to the new
/// sibling. Internal nodes promote the key at `SPLIT_POINT` instead.
pub const SPLIT_POINT: usize = ORDER / 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_constants() {
        assert_eq!(ORDER, 5);
        assert_eq!(MAX_KEYS, 4);
        assert_eq!(MAX_CHILDREN, MAX_KEYS + 1);
    }

    #[test]
    fn test_split_point_balances_overflow() {
        // An overfull node holds ORDER keys; both halves must be non-empty.
        assert_eq!(SPLIT_POINT, 2);
        assert!(SPLIT_POINT > 0);
        assert!(ORDER - SPLIT_POINT >= SPLIT_POINT);
    }
}
