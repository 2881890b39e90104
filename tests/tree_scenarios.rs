//! End-to-end insertion scenarios for the B+ tree.
//!
//! Expected shapes follow directly from the split rules: leaves keep
//! `[0, 2)` and hand `[2, 5)` to the new sibling, internal nodes promote the
//! key at index 2.

use bplus_index::{render, BPlusTree, Error, ORDER};

const DATASET: [i32; 20] = [
    2, 3, 5, 7, 14, 16, 19, 20, 22, 4, 8, 24, 27, 29, 33, 34, 38, 39, 9, 10,
];

fn build(keys: &[i32]) -> BPlusTree {
    let mut tree = BPlusTree::new(ORDER).unwrap();
    for &key in keys {
        tree.insert(key);
    }
    tree
}

// ============================================================================
// Reference dataset
// ============================================================================

#[test]
fn test_dataset_search() {
    let tree = build(&DATASET);

    assert!(tree.search(34));
    assert!(!tree.search(25));
    assert!(!tree.search(55));
    assert!(!tree.search(101));

    for key in DATASET {
        assert!(tree.search(key), "key {} missing", key);
    }
}

#[test]
fn test_dataset_shape() {
    let tree = build(&DATASET);

    assert_eq!(tree.leaf_count(), 8);
    assert_eq!(tree.height(), 3);

    let stats = tree.stats();
    assert_eq!(stats.leaf_splits, 7);
    assert_eq!(stats.internal_splits, 1);
    assert_eq!(stats.root_splits, 2);
    assert_eq!(stats.duplicates_rejected, 0);

    tree.validate().unwrap();
}

#[test]
fn test_dataset_rendering() {
    let tree = build(&DATASET);

    let expected = "\
[ 19 ]
  [ 5 , 8 , 14 ]
    [ 2 , 3 , 4 ]
    [ 5 , 7 ]
    [ 8 , 9 , 10 ]
    [ 14 , 16 ]
  [ 22 , 27 , 33 ]
    [ 19 , 20 ]
    [ 22 , 24 ]
    [ 27 , 29 ]
    [ 33 , 34 , 38 , 39 ]
Number of leaf nodes: 8
";
    assert_eq!(render::render_summary(&tree), expected);
}

#[test]
fn test_dataset_leaf_chain() {
    let tree = build(&DATASET);

    let chain: Vec<Vec<i32>> = tree.leaves().map(|leaf| leaf.keys().to_vec()).collect();
    assert_eq!(
        chain,
        vec![
            vec![2, 3, 4],
            vec![5, 7],
            vec![8, 9, 10],
            vec![14, 16],
            vec![19, 20],
            vec![22, 24],
            vec![27, 29],
            vec![33, 34, 38, 39],
        ]
    );

    let mut sorted = DATASET.to_vec();
    sorted.sort_unstable();
    assert_eq!(tree.iter().collect::<Vec<_>>(), sorted);
}

// ============================================================================
// Small scenarios
// ============================================================================

#[test]
fn test_repeated_key_never_splits() {
    let tree = build(&[1, 1, 1]);

    let root = tree.root();
    assert!(root.is_leaf());
    assert_eq!(root.keys(), &[1]);
    assert_eq!(tree.leaf_count(), 1);
    assert_eq!(tree.stats().leaf_splits, 0);
    assert_eq!(tree.stats().duplicates_rejected, 2);
}

#[test]
fn test_five_ascending_keys_split_once() {
    let tree = build(&[1, 2, 3, 4, 5]);

    assert_eq!(tree.stats().leaf_splits, 1);
    assert_eq!(tree.leaf_count(), 2);

    let root = tree.root();
    assert!(!root.is_leaf());
    assert_eq!(root.keys(), &[3]);

    let children: Vec<_> = root.children().collect();
    assert_eq!(children.len(), 2);
    assert!(children.iter().all(|child| child.is_leaf()));
    assert_eq!(children[0].keys(), &[1, 2]);
    assert_eq!(children[1].keys(), &[3, 4, 5]);
    assert_eq!(children[0].next_leaf().map(|n| n.id()), Some(children[1].id()));
    assert!(children[1].next_leaf().is_none());
}

#[test]
fn test_duplicate_insert_is_idempotent() {
    let once = build(&DATASET);

    let mut doubled = DATASET.to_vec();
    doubled.extend_from_slice(&DATASET);
    let twice = build(&doubled);

    assert_eq!(twice.len(), once.len());
    assert_eq!(twice.leaf_count(), once.leaf_count());
    assert_eq!(twice.iter().collect::<Vec<_>>(), once.iter().collect::<Vec<_>>());
    assert_eq!(render::render_tree(&twice), render::render_tree(&once));
    assert_eq!(twice.stats().duplicates_rejected, DATASET.len() as u64);
}

#[test]
fn test_descending_and_negative_keys() {
    let keys: Vec<i32> = (-60..60).rev().collect();
    let tree = build(&keys);

    tree.validate().unwrap();
    assert_eq!(tree.len(), 120);
    assert_eq!(tree.iter().next(), Some(-60));
    assert!(tree.search(-1));
    assert!(!tree.search(60));
    assert_eq!(tree.range(-2, 2).collect::<Vec<_>>(), vec![-2, -1, 0, 1, 2]);
}

#[test]
fn test_extreme_keys() {
    let tree = build(&[i32::MAX, i32::MIN, 0, i32::MAX - 1, i32::MIN + 1, 1]);

    tree.validate().unwrap();
    assert!(tree.search(i32::MIN));
    assert!(tree.search(i32::MAX));
    assert_eq!(tree.iter().next(), Some(i32::MIN));
}

#[test]
fn test_leaf_count_matches_split_count() {
    for n in [0, 4, 5, 13, 64, 257, 1000] {
        let keys: Vec<i32> = (0..n).map(|i| (i * 7919) % 1009).collect();
        let tree = build(&keys);

        assert_eq!(tree.leaf_count() as u64, tree.stats().leaf_splits + 1);
        assert_eq!(tree.height() as u64, tree.stats().root_splits + 1);
    }
}

#[test]
fn test_invalid_order_is_rejected() {
    let err = BPlusTree::new(4).unwrap_err();
    assert!(matches!(err, Error::InvalidOrder { order: 4 }));
    assert!(err.to_string().contains("order must be 5"));
}
