use super::node::{FpTree, HeaderEntry, ItemOrder, Node, NodeId, ROOT};
use crate::fp::items::ItemId;

impl FpTree {
    /// Inserts one ordered item sequence with the given weight, reusing an
    /// existing branch where the next item matches a child and creating a
    /// new branch otherwise.
    ///
    /// `items` must already follow the tree's canonical order. An empty
    /// sequence is a no-op, not an error.
    pub fn insert_transaction(&mut self, items: &[ItemId], weight: usize) {
        let mut current = ROOT;

        for &item in items {
            if !self.conditional && self.support_of_id(item) < self.min_support {
                match self.order {
                    // Everything after a below-threshold item is rarer
                    // still, so the rest of the sequence can be dropped.
                    ItemOrder::Frequency => break,
                    // No such guarantee lexicographically; drop this item
                    // and keep going.
                    ItemOrder::Lexicographic => continue,
                }
            }

            if let Some(&child) = self.nodes[current].children.get(&item) {
                self.nodes[child].count += weight;
                current = child;
            } else {
                let new_id = self.nodes.len();
                self.nodes.push(Node::new_item(item, weight, current));
                self.nodes[current].children.insert(item, new_id);
                self.append_to_chain(item, new_id);
                current = new_id;
            }
        }
    }

    /// Links a freshly created node onto its item's occurrence chain, in
    /// constant time via the chain-tail map.
    fn append_to_chain(&mut self, item: ItemId, node: NodeId) {
        match self.last_seen.get(&item) {
            Some(&tail) => self.nodes[tail].next_link = Some(node),
            None => {
                self.header.entry(item).or_default().chain_head = Some(node);
            }
        }
        self.last_seen.insert(item, node);
    }

    /// Sorts items into the tree's canonical insertion order.
    pub(crate) fn sort_items(&self, items: &mut [ItemId]) {
        match self.order {
            ItemOrder::Frequency => items.sort_by(|&a, &b| {
                self.support_of_id(b)
                    .cmp(&self.support_of_id(a))
                    .then_with(|| self.interner.token(a).cmp(self.interner.token(b)))
            }),
            ItemOrder::Lexicographic => {
                items.sort_by(|&a, &b| self.interner.token(a).cmp(self.interner.token(b)))
            }
        }
    }

    pub(crate) fn support_of_id(&self, item: ItemId) -> usize {
        self.header.get(&item).map_or(0, |entry| entry.support)
    }

    // Read-only traversal surface, sufficient for an external renderer.

    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Number of nodes in the arena, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Token of the node's item; `None` for the root sentinel.
    pub fn node_item(&self, id: NodeId) -> Option<&str> {
        self.nodes[id].item.map(|item| self.interner.token(item))
    }

    pub fn node_count(&self, id: NodeId) -> usize {
        self.nodes[id].count
    }

    pub fn node_parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    /// Children of a node, sorted by token for stable display.
    pub fn node_children(&self, id: NodeId) -> Vec<NodeId> {
        let mut children: Vec<NodeId> = self.nodes[id].children.values().copied().collect();
        children.sort_by_key(|&child| self.node_item(child));
        children
    }

    /// Next node on the same item's occurrence chain.
    pub fn node_link(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].next_link
    }

    pub fn item_id(&self, token: &str) -> Option<ItemId> {
        self.interner.get(token)
    }

    pub fn item_token(&self, item: ItemId) -> &str {
        self.interner.token(item)
    }

    /// Global support of a token, if it ever occurred.
    pub fn support(&self, token: &str) -> Option<usize> {
        let id = self.interner.get(token)?;
        self.header.get(&id).map(|entry| entry.support)
    }

    /// Head of a token's occurrence chain.
    pub fn chain_head(&self, token: &str) -> Option<NodeId> {
        let id = self.interner.get(token)?;
        self.header.get(&id).and_then(|entry| entry.chain_head)
    }

    pub fn min_support(&self) -> usize {
        self.min_support
    }

    pub fn order(&self) -> ItemOrder {
        self.order
    }

    pub fn is_conditional(&self) -> bool {
        self.conditional
    }

    /// Item/support pairs, sorted by descending support then token, for
    /// external display.
    pub fn header_snapshot(&self) -> Vec<(String, usize)> {
        let mut snapshot: Vec<(String, usize)> = self
            .header
            .iter()
            .map(|(&item, entry)| (self.interner.token(item).to_string(), entry.support))
            .collect();
        snapshot.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        snapshot
    }

    /// Resolves item ids back to tokens, e.g. for inspecting a pattern base.
    pub fn resolve_path(&self, path: &[ItemId]) -> Vec<String> {
        path.iter()
            .map(|&item| self.interner.token(item).to_string())
            .collect()
    }

    pub(crate) fn header_entry_mut(&mut self, item: ItemId) -> &mut HeaderEntry {
        self.header.entry(item).or_default()
    }
}
