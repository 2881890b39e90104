//! Node model: the leaf/internal sum type and its read-only view.

use crate::common::NodeId;
use crate::index::btree::BPlusTree;

/// Key type stored in the tree.
pub type Key = i32;

/// A node in the arena.
///
/// Leaf and internal nodes carry different attached data, so a child list
/// can never be read off a leaf and a `next` link never off an internal node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    Leaf(LeafNode),
    Internal(InternalNode),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct LeafNode {
    /// Strictly increasing.
    pub keys: Vec<Key>,
    /// Right sibling in the leaf chain. Navigation only, not ownership.
    pub next: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InternalNode {
    /// Separator keys, strictly increasing.
    pub keys: Vec<Key>,
    /// `children.len() == keys.len() + 1`. `children[i]` holds every key `k`
    /// with `keys[i - 1] <= k < keys[i]`.
    pub children: Vec<NodeId>,
}

impl LeafNode {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InternalNode {
    /// Index of the child whose range covers `key`: the number of
    /// separators `<= key`.
    #[inline]
    pub fn child_index(&self, key: Key) -> usize {
        self.keys.partition_point(|&sep| sep <= key)
    }
}

impl Node {
    #[inline]
    pub fn keys(&self) -> &[Key] {
        match self {
            Node::Leaf(leaf) => &leaf.keys,
            Node::Internal(internal) => &internal.keys,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }
}

/// Read-only view of one node, borrowed from its tree.
///
/// This is the structural contract offered to presentation layers such as
/// [`render`](crate::render): role, keys and children are visible, nothing
/// can be mutated.
///
/// # Example
/// ```
/// use bplus_index::{BPlusTree, ORDER};
///
/// let mut tree = BPlusTree::new(ORDER).unwrap();
/// for key in 1..=5 {
///     tree.insert(key);
/// }
///
/// let root = tree.root();
/// assert!(!root.is_leaf());
/// assert_eq!(root.keys(), &[3]);
///
/// let leaves: Vec<&[i32]> = root.children().map(|child| child.keys()).collect();
/// assert_eq!(leaves, vec![&[1, 2][..], &[3, 4, 5][..]]);
/// ```
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a BPlusTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(tree: &'a BPlusTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// Arena id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn is_leaf(&self) -> bool {
        self.tree.node(self.id).is_leaf()
    }

    pub fn keys(&self) -> &'a [Key] {
        self.tree.node(self.id).keys()
    }

    /// Children in key order. Empty for leaves.
    pub fn children(&self) -> impl ExactSizeIterator<Item = NodeRef<'a>> + 'a {
        let tree = self.tree;
        let ids: &'a [NodeId] = match tree.node(self.id) {
            Node::Internal(internal) => internal.children.as_slice(),
            Node::Leaf(_) => &[],
        };
        ids.iter().map(move |&id| NodeRef::new(tree, id))
    }

    /// Next leaf in the leaf chain. Always `None` for internal nodes.
    pub fn next_leaf(&self) -> Option<NodeRef<'a>> {
        match self.tree.node(self.id) {
            Node::Leaf(leaf) => leaf.next.map(|id| NodeRef::new(self.tree, id)),
            Node::Internal(_) => None,
        }
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("is_leaf", &self.is_leaf())
            .field("keys", &self.keys())
            .finish()
    }
}
