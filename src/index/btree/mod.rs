//! B+ tree index.
//!
//! # Components
//! - [`BPlusTree`] - The tree: leaf location, search, insertion
//! - [`NodeRef`] - Read-only structural view of a node
//! - [`Leaves`] / [`Iter`] - Traversal along the leaf chain
//! - [`TreeStats`] - Split and duplicate counters
//!
//! Splitting (`split.rs`) and invariant checking (`validate.rs`) extend
//! [`BPlusTree`] with further `impl` blocks.

mod iter;
mod node;
mod split;
mod stats;
mod tree;
mod validate;

pub use iter::{Iter, Leaves};
pub use node::{Key, NodeRef};
pub use stats::TreeStats;
pub use tree::BPlusTree;
