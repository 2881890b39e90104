//! The B+ tree: construction, leaf location, search and insertion.
//!
//! Split handling lives in `split.rs`; this file owns the node arena and the
//! descent paths that feed it.

use tracing::{info, trace};

use crate::common::config::ORDER;
use crate::common::{Error, NodeId, Result};
use crate::index::btree::node::{InternalNode, Key, LeafNode, Node, NodeRef};
use crate::index::btree::TreeStats;

/// An in-memory B+ tree over integer keys.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │                        BPlusTree                         │
/// │  root ──▶ nodes: Vec<Node>                               │
/// │           [Internal] [Leaf] [Leaf] [Internal] [Leaf] ... │
/// │                                                          │
/// │  Internal: keys + children (NodeId, owned edges)         │
/// │  Leaf:     keys + next     (NodeId, navigation only)     │
/// │                                                          │
/// │  leaf chain: Leaf ─next─▶ Leaf ─next─▶ Leaf ─▶ None      │
/// └──────────────────────────────────────────────────────────┘
/// ```
///
/// Every node is owned by the arena and reachable from exactly one parent.
/// Nodes are only ever created by splits and never freed, so a `NodeId`
/// stays valid for the lifetime of the tree.
///
/// # Thread Safety
/// None. Mutation takes `&mut self`; callers that need sharing must wrap the
/// whole tree in a single lock, since a split can touch any ancestor.
///
/// # Usage
/// ```
/// use bplus_index::{BPlusTree, ORDER};
///
/// let mut tree = BPlusTree::new(ORDER)?;
/// tree.insert(42);
/// tree.insert(42); // duplicate, ignored
///
/// assert!(tree.search(42));
/// assert!(!tree.search(7));
/// assert_eq!(tree.len(), 1);
/// # Ok::<(), bplus_index::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct BPlusTree {
    /// Node arena. Index 0 is the initial root leaf.
    pub(super) nodes: Vec<Node>,

    /// Current root; reassigned whenever the root splits.
    pub(super) root: NodeId,

    /// Maximum number of children per internal node.
    order: usize,

    /// Number of distinct keys stored.
    len: usize,

    pub(super) stats: TreeStats,
}

impl BPlusTree {
    /// Create an empty tree: a single empty leaf acting as root.
    ///
    /// # Errors
    /// Returns `Error::InvalidOrder` unless `order` is [`ORDER`].
    pub fn new(order: usize) -> Result<Self> {
        if order != ORDER {
            return Err(Error::InvalidOrder { order });
        }

        Ok(Self::with_order(order))
    }

    fn with_order(order: usize) -> Self {
        Self {
            nodes: vec![Node::Leaf(LeafNode::new())],
            root: NodeId::new(0),
            order,
            len: 0,
            stats: TreeStats::new(),
        }
    }

    // ========================================================================
    // Public API: queries
    // ========================================================================

    /// Tree order (maximum children per internal node).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of distinct keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels; a lone root leaf has height 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = self.root;

        while let Node::Internal(internal) = self.node(node) {
            node = internal.children[0];
            height += 1;
        }

        height
    }

    /// Snapshot of the structural counters.
    pub fn stats(&self) -> TreeStats {
        self.stats
    }

    /// Read-only view of the root node.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, self.root)
    }

    /// Check whether `key` is present.
    ///
    /// Never fails; an empty tree simply answers `false`.
    pub fn search(&self, key: Key) -> bool {
        let leaf = self.find_leaf(key);
        self.leaf(leaf).keys.binary_search(&key).is_ok()
    }

    /// Number of leaves, counted along the leaf chain.
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    // ========================================================================
    // Public API: mutation
    // ========================================================================

    /// Insert `key`.
    ///
    /// Inserting a key that is already present is a no-op: the tree is left
    /// untouched and only `stats().duplicates_rejected` moves. An overfull
    /// leaf is split, which may cascade splits up to the root and grow the
    /// tree by one level.
    pub fn insert(&mut self, key: Key) {
        let mut ancestors = Vec::new();
        let leaf_id = self.descend(key, Some(&mut ancestors));
        let max_keys = self.max_keys();

        let leaf = self.leaf_mut(leaf_id);
        let overflow = match leaf.keys.binary_search(&key) {
            Ok(_) => None,
            Err(pos) => {
                leaf.keys.insert(pos, key);
                Some(leaf.keys.len() > max_keys)
            }
        };

        match overflow {
            None => {
                self.stats.duplicates_rejected += 1;
                info!(key, "duplicate key not inserted");
            }
            Some(overflow) => {
                self.len += 1;
                if overflow {
                    self.split_leaf(leaf_id, &mut ancestors);
                }
            }
        }
    }

    // ========================================================================
    // Internal: leaf location
    // ========================================================================

    /// Locate the unique leaf whose key range covers `key`.
    pub(crate) fn find_leaf(&self, key: Key) -> NodeId {
        self.descend(key, None)
    }

    /// Walk from the root to the covering leaf, optionally recording every
    /// internal node passed on the way (root first).
    fn descend(&self, key: Key, mut path: Option<&mut Vec<NodeId>>) -> NodeId {
        let mut node = self.root;

        while let Node::Internal(internal) = self.node(node) {
            if let Some(path) = path.as_deref_mut() {
                path.push(node);
            }
            node = internal.children[internal.child_index(key)];
        }

        trace!(key, leaf = %node, "located leaf");
        node
    }

    /// Leftmost leaf, i.e. the head of the leaf chain.
    pub(crate) fn first_leaf(&self) -> NodeId {
        let mut node = self.root;

        while let Node::Internal(internal) = self.node(node) {
            node = internal.children[0];
        }

        node
    }

    // ========================================================================
    // Internal: arena access
    // ========================================================================

    #[inline]
    pub(crate) fn max_keys(&self) -> usize {
        self.order - 1
    }

    #[inline]
    pub(crate) fn split_point(&self) -> usize {
        self.order / 2
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn leaf(&self, id: NodeId) -> &LeafNode {
        match self.node(id) {
            Node::Leaf(leaf) => leaf,
            Node::Internal(_) => unreachable!("{id} is not a leaf"),
        }
    }

    pub(super) fn leaf_mut(&mut self, id: NodeId) -> &mut LeafNode {
        match &mut self.nodes[id.0] {
            Node::Leaf(leaf) => leaf,
            Node::Internal(_) => unreachable!("{id} is not a leaf"),
        }
    }

    pub(super) fn internal_mut(&mut self, id: NodeId) -> &mut InternalNode {
        match &mut self.nodes[id.0] {
            Node::Internal(internal) => internal,
            Node::Leaf(_) => unreachable!("{id} is not an internal node"),
        }
    }

    /// Move `node` into the arena and return its id.
    pub(super) fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

impl Default for BPlusTree {
    fn default() -> Self {
        Self::with_order(ORDER)
    }
}
