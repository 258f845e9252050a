//! Textual rendering of a tree and its header.
//!
//! Implemented entirely on the public read-only traversal surface, so any
//! external presentation layer could produce the same output.

use std::fmt;

use crate::fp::tree::{FpTree, NodeId};

/// Indentation-based dump of the whole tree, root first.
pub fn render_tree(tree: &FpTree) -> String {
    let mut out = String::new();
    render_node(tree, tree.root(), 0, &mut out);
    out
}

fn render_node(tree: &FpTree, id: NodeId, depth: usize, out: &mut String) {
    let label = tree.node_item(id).unwrap_or("{}");
    match tree.node_link(id) {
        Some(link) => out.push_str(&format!(
            "{}--> {} (id: {}, link: {}), count: {}\n",
            " ".repeat(depth),
            label,
            id,
            link,
            tree.node_count(id)
        )),
        None => out.push_str(&format!(
            "{}--> {} (id: {}), count: {}\n",
            " ".repeat(depth),
            label,
            id,
            tree.node_count(id)
        )),
    }
    for child in tree.node_children(id) {
        render_node(tree, child, depth + 1, out);
    }
}

/// One line per header entry, most frequent first.
pub fn render_header(tree: &FpTree) -> String {
    let mut out = String::new();
    for (token, support) in tree.header_snapshot() {
        match tree.chain_head(&token) {
            Some(head) => out.push_str(&format!(
                "item {}: support = {}, chain head = node {}\n",
                token, support, head
            )),
            None => out.push_str(&format!("item {}: support = {}\n", token, support)),
        }
    }
    out
}

impl fmt::Display for FpTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_tree(self))
    }
}
