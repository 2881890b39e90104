//! Node splitting and separator promotion.
//!
//! An insert that overfills a leaf hands its ancestor stack (root first, as
//! recorded during the descent) to [`BPlusTree::split_leaf`]. Each promotion
//! pops one ancestor, so the parent of the node being split is always the top
//! of the stack. An empty stack means the split node was the root.
//!
//! ```text
//! leaf split (order 5, mid = 2)        internal split (order 5, mid = 2)
//!
//!   [a b c d e]                          [a b c d e]  children c0..c5
//!        │                                    │
//!   [a b] ─next─▶ [c d e]                [a b]   c   [d e]
//!           c copied up                  c0..c2 moved up c3..c5
//! ```

use tracing::debug;

use crate::common::NodeId;
use crate::index::btree::node::{InternalNode, Key, LeafNode, Node};
use crate::index::btree::BPlusTree;

impl BPlusTree {
    /// Split an overfull leaf (holding `order` keys).
    ///
    /// The leaf keeps `[0, mid)`, a new right sibling takes `[mid, order)` and
    /// is spliced into the leaf chain directly after it. The sibling's first
    /// key is copied up as the separator.
    pub(super) fn split_leaf(&mut self, leaf_id: NodeId, ancestors: &mut Vec<NodeId>) {
        let mid = self.split_point();

        let (right_keys, next) = {
            let leaf = self.leaf_mut(leaf_id);
            (leaf.keys.split_off(mid), leaf.next.take())
        };
        let separator = right_keys[0];

        let new_leaf_id = self.alloc(Node::Leaf(LeafNode {
            keys: right_keys,
            next,
        }));
        self.leaf_mut(leaf_id).next = Some(new_leaf_id);

        self.stats.leaf_splits += 1;
        debug!(separator, left = %leaf_id, right = %new_leaf_id, "split leaf");

        self.insert_into_parent(leaf_id, separator, new_leaf_id, ancestors);
    }

    /// Hook a freshly split `right` sibling into the parent of `left`.
    fn insert_into_parent(
        &mut self,
        left: NodeId,
        separator: Key,
        right: NodeId,
        ancestors: &mut Vec<NodeId>,
    ) {
        let Some(parent_id) = ancestors.pop() else {
            self.grow_root(left, separator, right);
            return;
        };

        let max_keys = self.max_keys();
        let parent = self.internal_mut(parent_id);

        let pos = match parent.keys.binary_search(&separator) {
            Ok(_) => panic!("separator {separator} already present in parent {parent_id}"),
            Err(pos) => pos,
        };
        assert_eq!(
            parent.children[pos], left,
            "{parent_id} does not hold {left} where separator {separator} belongs"
        );

        parent.keys.insert(pos, separator);
        parent.children.insert(pos + 1, right);

        if parent.keys.len() > max_keys {
            self.split_internal(parent_id, ancestors);
        }
    }

    /// Split an overfull internal node (holding `order` keys).
    ///
    /// Unlike a leaf split, the middle key moves up and is kept by neither
    /// half: the node keeps keys `[0, mid)` and children `[0, mid]`, the new
    /// sibling takes keys `(mid, order)` and the remaining children.
    fn split_internal(&mut self, node_id: NodeId, ancestors: &mut Vec<NodeId>) {
        let mid = self.split_point();

        let (separator, right_keys, right_children) = {
            let internal = self.internal_mut(node_id);
            let separator = internal.keys.remove(mid);
            let right_keys = internal.keys.split_off(mid);
            let right_children = internal.children.split_off(mid + 1);
            (separator, right_keys, right_children)
        };

        let new_internal_id = self.alloc(Node::Internal(InternalNode {
            keys: right_keys,
            children: right_children,
        }));

        self.stats.internal_splits += 1;
        debug!(separator, left = %node_id, right = %new_internal_id, "split internal node");

        self.insert_into_parent(node_id, separator, new_internal_id, ancestors);
    }

    /// Root split: grow the tree by one level.
    fn grow_root(&mut self, left: NodeId, separator: Key, right: NodeId) {
        assert_eq!(left, self.root, "{left} has no parent but is not the root");

        let new_root = self.alloc(Node::Internal(InternalNode {
            keys: vec![separator],
            children: vec![left, right],
        }));
        self.root = new_root;

        self.stats.root_splits += 1;
        debug!(separator, root = %new_root, height = self.height(), "grew new root");
    }
}

#[cfg(test)]
mod tests {
    use crate::index::btree::node::Node;
    use crate::index::btree::BPlusTree;

    fn keys_of(tree: &BPlusTree, node: crate::NodeId) -> Vec<i32> {
        tree.node(node).keys().to_vec()
    }

    #[test]
    fn test_no_split_below_capacity() {
        let mut tree = BPlusTree::default();
        for key in 1..=4 {
            tree.insert(key);
        }

        assert_eq!(tree.stats().leaf_splits, 0);
        assert!(tree.root().is_leaf());
        assert_eq!(tree.nodes.len(), 1);
    }

    #[test]
    fn test_first_leaf_split_creates_root() {
        let mut tree = BPlusTree::default();
        for key in 1..=5 {
            tree.insert(key);
        }

        assert_eq!(tree.stats().leaf_splits, 1);
        assert_eq!(tree.stats().root_splits, 1);
        assert_eq!(tree.height(), 2);

        let root = match tree.node(tree.root) {
            Node::Internal(internal) => internal.clone(),
            Node::Leaf(_) => panic!("Expected internal root"),
        };
        assert_eq!(root.keys, vec![3]);
        assert_eq!(keys_of(&tree, root.children[0]), vec![1, 2]);
        assert_eq!(keys_of(&tree, root.children[1]), vec![3, 4, 5]);
    }

    #[test]
    fn test_leaf_split_splices_chain() {
        let mut tree = BPlusTree::default();
        // Fill two leaves, then overflow the left one.
        for key in [10, 20, 30, 40, 50, 1, 2, 3] {
            tree.insert(key);
        }

        let chain: Vec<Vec<i32>> = tree.leaves().map(|leaf| leaf.keys().to_vec()).collect();
        assert_eq!(chain, vec![vec![1, 2], vec![3, 10, 20], vec![30, 40, 50]]);
        assert_eq!(tree.root().keys(), &[3, 30]);
    }

    #[test]
    fn test_internal_split_promotes_middle_key() {
        let mut tree = BPlusTree::default();
        // Ascending inserts: every leaf split promotes into the rightmost
        // position; the fifth split overflows the root's key list.
        for key in 1..=14 {
            tree.insert(key);
        }

        assert_eq!(tree.stats().leaf_splits, 5);
        assert_eq!(tree.stats().internal_splits, 1);
        assert_eq!(tree.leaf_count(), 6);
        assert_eq!(tree.height(), 3);

        let root = tree.root();
        assert_eq!(root.keys(), &[7]);

        let halves: Vec<Vec<i32>> = root.children().map(|c| c.keys().to_vec()).collect();
        assert_eq!(halves, vec![vec![3, 5], vec![9, 11]]);
        // The promoted key lives in neither half.
        assert!(halves.iter().all(|keys| !keys.contains(&7)));
    }

    #[test]
    fn test_split_keeps_fan_out() {
        let mut tree = BPlusTree::default();
        for key in (0..200).map(|i| (i * 37) % 211) {
            tree.insert(key);
        }

        for node in &tree.nodes {
            if let Node::Internal(internal) = node {
                assert_eq!(internal.children.len(), internal.keys.len() + 1);
                assert!(internal.keys.len() <= tree.max_keys());
            }
        }
    }

    #[test]
    fn test_cascading_splits_grow_height() {
        let mut tree = BPlusTree::default();
        for key in 1..=100 {
            tree.insert(key);
        }

        assert_eq!(tree.leaf_count(), 49);
        assert_eq!(tree.stats().leaf_splits, 48);
        assert_eq!(tree.stats().internal_splits, 19);
        assert_eq!(tree.height(), 4);
        assert_eq!(tree.stats().root_splits as usize, tree.height() - 1);
    }
}
