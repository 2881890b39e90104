//! Structural invariant checking.

use crate::common::{Error, NodeId, Result};
use crate::index::btree::node::{Key, Node};
use crate::index::btree::BPlusTree;

/// Per-walk state for [`BPlusTree::validate`].
struct Walk {
    /// Leaves in left-to-right order as reached from the root.
    leaves: Vec<NodeId>,
    /// Depth of the first leaf reached; every other leaf must match it.
    leaf_depth: Option<usize>,
    visited: Vec<bool>,
}

impl BPlusTree {
    /// Check every structural invariant of the tree.
    ///
    /// Verified:
    /// - keys strictly increasing in every node
    /// - no node above `order - 1` keys, no non-root node below `order / 2`
    /// - internal nodes have `keys + 1` children
    /// - every key lies within the bounds set by its ancestors' separators
    /// - all leaves sit at the same depth
    /// - every arena node is reachable from exactly one parent
    /// - the leaf chain visits every leaf once, left to right, and holds
    ///   exactly `len()` keys in ascending order
    ///
    /// # Errors
    /// Returns `Error::Corrupted` describing the first violation found.
    pub fn validate(&self) -> Result<()> {
        let mut walk = Walk {
            leaves: Vec::new(),
            leaf_depth: None,
            visited: vec![false; self.nodes.len()],
        };

        self.validate_node(self.root, None, None, 0, &mut walk)?;

        if let Some(orphan) = walk.visited.iter().position(|seen| !seen) {
            return corrupted(format!("{} is unreachable from the root", NodeId::new(orphan)));
        }

        self.validate_leaf_chain(&walk.leaves)
    }

    fn validate_node(
        &self,
        id: NodeId,
        lower: Option<Key>,
        upper: Option<Key>,
        depth: usize,
        walk: &mut Walk,
    ) -> Result<()> {
        if std::mem::replace(&mut walk.visited[id.0], true) {
            return corrupted(format!("{id} has more than one parent"));
        }

        let keys = self.node(id).keys();

        if !keys.windows(2).all(|pair| pair[0] < pair[1]) {
            return corrupted(format!("{id} keys not strictly increasing: {keys:?}"));
        }
        if keys.len() > self.max_keys() {
            return corrupted(format!("{id} holds {} keys", keys.len()));
        }
        if id != self.root && keys.len() < self.split_point() {
            return corrupted(format!("{id} is underfull with {} keys", keys.len()));
        }
        if let (Some(lower), Some(&first)) = (lower, keys.first()) {
            if first < lower {
                return corrupted(format!("{id} key {first} below separator {lower}"));
            }
        }
        if let (Some(upper), Some(&last)) = (upper, keys.last()) {
            if last >= upper {
                return corrupted(format!("{id} key {last} not below separator {upper}"));
            }
        }

        match self.node(id) {
            Node::Leaf(_) => {
                match walk.leaf_depth {
                    None => walk.leaf_depth = Some(depth),
                    Some(expected) if expected != depth => {
                        return corrupted(format!(
                            "{id} at depth {depth}, other leaves at depth {expected}"
                        ));
                    }
                    Some(_) => {}
                }
                walk.leaves.push(id);
            }
            Node::Internal(internal) => {
                if internal.children.len() != keys.len() + 1 {
                    return corrupted(format!(
                        "{id} has {} keys but {} children",
                        keys.len(),
                        internal.children.len()
                    ));
                }

                for (i, &child) in internal.children.iter().enumerate() {
                    let child_lower = if i == 0 { lower } else { Some(keys[i - 1]) };
                    let child_upper = keys.get(i).copied().or(upper);
                    self.validate_node(child, child_lower, child_upper, depth + 1, walk)?;
                }
            }
        }

        Ok(())
    }

    fn validate_leaf_chain(&self, expected: &[NodeId]) -> Result<()> {
        let chain: Vec<NodeId> = self
            .leaves()
            .take(expected.len() + 1)
            .map(|leaf| leaf.id())
            .collect();

        if chain != expected {
            return corrupted(format!(
                "leaf chain {chain:?} does not match tree order {expected:?}"
            ));
        }

        let mut count = 0;
        let mut previous: Option<Key> = None;
        for key in self.iter() {
            if previous.is_some_and(|prev| prev >= key) {
                return corrupted(format!("leaf chain out of order at key {key}"));
            }
            previous = Some(key);
            count += 1;
        }

        if count != self.len() {
            return corrupted(format!(
                "leaf chain holds {count} keys, tree reports {}",
                self.len()
            ));
        }

        Ok(())
    }
}

fn corrupted(reason: String) -> Result<()> {
    Err(Error::Corrupted(reason))
}
