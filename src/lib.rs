//! Frequent-itemset mining over an FP-Tree.
//!
//! The tree encodes a transaction database as a prefix tree under a fixed
//! global item order, with a per-item header index and occurrence chains
//! that let every node of one item be visited without scanning the tree.
//! On top of it sit prefix-path collection, conditional-tree construction
//! for recursive mining, and an occurrence-chain support checker.
//!
//! ```
//! use fptree::{FpTree, ItemOrder};
//!
//! let transactions = vec![
//!     vec!["a", "b", "c"],
//!     vec!["a", "b"],
//!     vec!["a", "c", "d"],
//!     vec!["b", "c"],
//! ];
//!
//! let mut tree = FpTree::new(2, ItemOrder::Frequency);
//! tree.grow(&transactions).unwrap();
//!
//! assert!(tree.is_frequent(&["a", "b"]).unwrap());
//! assert!(!tree.is_frequent(&["a", "d"]).unwrap());
//! ```

pub mod fp;

pub use fp::{FpError, FpTree, ItemId, ItemOrder, Mined, NodeId, PatternBase, SupportCheck};
