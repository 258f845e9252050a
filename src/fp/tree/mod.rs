// FP-Tree data structures and operations.

mod node;
mod tree_ops;

pub use node::{FpTree, HeaderEntry, ItemOrder, Node, NodeId, ROOT};
