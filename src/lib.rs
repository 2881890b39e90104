//! bplus-index - an in-memory order-5 B+ tree over integer keys.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          bplus-index                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Driver (bin/bptree) + Loader (loader)            │   │
//! │  │      key file → Vec<i32> → insert / search / print      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Diagnostics (render)  [outside the core]       │   │
//! │  │        reads the tree only through NodeRef              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Index Layer (index/btree)                  │   │
//! │  │   find_leaf → insert → split leaf → promote separator   │   │
//! │  │        → split internal → ... → grow new root           │   │
//! │  │      node arena + leaf chain + stats + validation       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (NodeId, Error, config)
//! - [`index`] - The B+ tree
//! - [`render`] - Level-indented text dump of a tree
//! - [`loader`] - One-integer-per-line dataset loading
//!
//! # Quick Start
//! ```
//! use bplus_index::{BPlusTree, ORDER};
//!
//! let mut tree = BPlusTree::new(ORDER).unwrap();
//! for key in [2, 3, 5, 7, 14, 16, 19, 20, 22, 4] {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.search(14));
//! assert!(!tree.search(15));
//! assert_eq!(tree.iter().take(3).collect::<Vec<_>>(), vec![2, 3, 4]);
//! ```

pub mod common;
pub mod index;
pub mod loader;
pub mod render;

// Re-export commonly used items at crate root for convenience
pub use common::config::ORDER;
pub use common::{Error, NodeId, Result};

pub use index::btree::{BPlusTree, Iter, Key, Leaves, NodeRef, TreeStats};
