use std::collections::HashMap;

use crate::fp::items::{Interner, ItemId};

/// Arena index of a node; doubles as the diagnostic node id
/// (monotonically increasing in creation order, no algorithmic role).
pub type NodeId = usize;

/// Arena index of the root sentinel.
pub const ROOT: NodeId = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// `None` only for the root sentinel.
    pub(crate) item: Option<ItemId>,
    /// Number of transactions passing through this node on this exact path.
    pub(crate) count: usize,
    pub(crate) parent: Option<NodeId>,
    /// Child labels are unique among siblings.
    pub(crate) children: HashMap<ItemId, NodeId>,
    /// Next node in the tree carrying the same item; `None` at the chain tail.
    pub(crate) next_link: Option<NodeId>,
}

impl Node {
    pub(crate) fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
            next_link: None,
        }
    }

    pub(crate) fn new_item(item: ItemId, count: usize, parent: NodeId) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: HashMap::new(),
            next_link: None,
        }
    }
}

/// Per-item header record: global support from the counting pass, and the
/// head of the item's occurrence chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderEntry {
    /// Fixed after the counting pass; tree growth never changes it.
    pub(crate) support: usize,
    /// First node created for the item; `None` until one exists.
    pub(crate) chain_head: Option<NodeId>,
}

/// Canonical order in which a transaction's items are inserted along a path.
///
/// All transactions of one tree share the same order so that common
/// prefixes merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOrder {
    /// Descending global support, ties broken by token ascending.
    Frequency,
    /// Token ascending.
    Lexicographic,
}

/// Prefix tree over a transaction database, with a per-item header index.
///
/// Nodes live in an arena (`nodes[ROOT]` is the sentinel root) and refer to
/// each other by index, so the parent/child/occurrence-chain triple of links
/// never forms an ownership cycle.
#[derive(Debug, Clone)]
pub struct FpTree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) header: HashMap<ItemId, HeaderEntry>,
    pub(crate) interner: Interner,
    pub(crate) min_support: usize,
    pub(crate) order: ItemOrder,
    /// Conditional trees skip per-item threshold pruning during insertion;
    /// pruning already happened when their pattern base was selected.
    pub(crate) conditional: bool,
    /// Chain tail per item, valid for the duration of one build.
    pub(crate) last_seen: HashMap<ItemId, NodeId>,
}

impl FpTree {
    pub fn new(min_support: usize, order: ItemOrder) -> Self {
        Self {
            nodes: vec![Node::new_root()],
            header: HashMap::new(),
            interner: Interner::new(),
            min_support,
            order,
            conditional: false,
            last_seen: HashMap::new(),
        }
    }

    pub(crate) fn new_conditional(min_support: usize, order: ItemOrder, interner: Interner) -> Self {
        Self {
            nodes: vec![Node::new_root()],
            header: HashMap::new(),
            interner,
            min_support,
            order,
            conditional: true,
            last_seen: HashMap::new(),
        }
    }
}
