//! Ordered traversal along the leaf chain.
//!
//! None of these iterators touch internal nodes after the initial descent:
//! they start at a leaf and follow `next` links.

use std::iter::FusedIterator;
use std::slice;

use crate::common::NodeId;
use crate::index::btree::node::{Key, NodeRef};
use crate::index::btree::BPlusTree;

/// Iterator over leaves in ascending key order.
///
/// Created by [`BPlusTree::leaves`].
#[derive(Debug, Clone)]
pub struct Leaves<'a> {
    tree: &'a BPlusTree,
    next: Option<NodeId>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.tree.leaf(id).next;
        Some(NodeRef::new(self.tree, id))
    }
}

impl FusedIterator for Leaves<'_> {}

/// Iterator over keys in ascending order.
///
/// Created by [`BPlusTree::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    leaves: Leaves<'a>,
    current: slice::Iter<'a, Key>,
}

impl<'a> Iter<'a> {
    fn starting_at(tree: &'a BPlusTree, leaf: NodeId) -> Self {
        Self {
            leaves: Leaves {
                tree,
                next: Some(leaf),
            },
            current: [].iter(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        loop {
            if let Some(&key) = self.current.next() {
                return Some(key);
            }
            self.current = self.leaves.next()?.keys().iter();
        }
    }
}

impl FusedIterator for Iter<'_> {}

impl BPlusTree {
    /// Walk the leaf chain from the leftmost leaf.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves {
            tree: self,
            next: Some(self.first_leaf()),
        }
    }

    /// All keys in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::starting_at(self, self.first_leaf())
    }

    /// Keys `k` with `from <= k <= to`, ascending.
    ///
    /// Descends once to the leaf covering `from`, then scans the chain.
    /// Yields nothing when `from > to`.
    ///
    /// # Example
    /// ```
    /// use bplus_index::BPlusTree;
    ///
    /// let mut tree = BPlusTree::default();
    /// for key in (0..100).step_by(10) {
    ///     tree.insert(key);
    /// }
    ///
    /// let hits: Vec<i32> = tree.range(15, 50).collect();
    /// assert_eq!(hits, vec![20, 30, 40, 50]);
    /// ```
    pub fn range(&self, from: Key, to: Key) -> impl Iterator<Item = Key> + '_ {
        Iter::starting_at(self, self.find_leaf(from))
            .skip_while(move |&key| key < from)
            .take_while(move |&key| key <= to)
    }
}

impl<'a> IntoIterator for &'a BPlusTree {
    type Item = Key;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
