use std::collections::HashMap;

/// Dense identifier for an interned item token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u32);

impl ItemId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Two-way mapping between item tokens and dense ids.
///
/// The tree arena and header tables work on `ItemId` only; tokens are
/// resolved back for lexicographic ordering, snapshots and display.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    tokens: Vec<String>,
    lookup: HashMap<String, ItemId>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `token`, interning it first if unseen.
    pub fn intern(&mut self, token: &str) -> ItemId {
        if let Some(&id) = self.lookup.get(token) {
            return id;
        }
        let id = ItemId(self.tokens.len() as u32);
        self.tokens.push(token.to_string());
        self.lookup.insert(token.to_string(), id);
        id
    }

    pub fn get(&self, token: &str) -> Option<ItemId> {
        self.lookup.get(token).copied()
    }

    pub fn token(&self, id: ItemId) -> &str {
        &self.tokens[id.index()]
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
