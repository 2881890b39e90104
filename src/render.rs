//! Text rendering of a tree for diagnostics.
//!
//! Sits outside the index: it only sees the tree through [`NodeRef`].
//!
//! # Format
//! One node per line in pre-order, keys bracketed and separated by `" , "`,
//! two spaces of indentation per level:
//! ```text
//! [ 3 ]
//!   [ 1 , 2 ]
//!   [ 3 , 4 , 5 ]
//! ```

use crate::index::btree::{BPlusTree, NodeRef};

/// Indentation per tree level.
const INDENT: &str = "  ";

/// Render every node of `tree`, one line each.
///
/// # Example
/// ```
/// use bplus_index::{render, BPlusTree};
///
/// let mut tree = BPlusTree::default();
/// for key in 1..=5 {
///     tree.insert(key);
/// }
///
/// assert_eq!(render::render_tree(&tree), "[ 3 ]\n  [ 1 , 2 ]\n  [ 3 , 4 , 5 ]\n");
/// ```
pub fn render_tree(tree: &BPlusTree) -> String {
    let mut out = String::new();
    render_node(tree.root(), 0, &mut out);
    out
}

/// [`render_tree`] followed by the leaf count line.
pub fn render_summary(tree: &BPlusTree) -> String {
    let mut out = render_tree(tree);
    out.push_str(&format!("Number of leaf nodes: {}\n", tree.leaf_count()));
    out
}

fn render_node(node: NodeRef<'_>, depth: usize, out: &mut String) {
    out.push_str(&INDENT.repeat(depth));
    out.push_str(&format_keys(node.keys()));
    out.push('\n');

    for child in node.children() {
        render_node(child, depth + 1, out);
    }
}

/// `[ k1 , k2 ]`; an empty node renders as `[  ]`.
fn format_keys(keys: &[i32]) -> String {
    let joined = keys
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" , ");
    format!("[ {} ]", joined)
}
