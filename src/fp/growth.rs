use std::collections::HashSet;

use log::debug;

use crate::fp::error::FpError;
use crate::fp::items::ItemId;
use crate::fp::tree::{FpTree, ROOT};

impl FpTree {
    /// Builds the tree from a transaction database in two passes.
    ///
    /// Pass one counts, per item, the number of distinct transactions
    /// containing it (duplicates inside a transaction count once) and sets
    /// the root count to the exact number of transactions. Pass two
    /// deduplicates each transaction, sorts it into the canonical order and
    /// inserts it.
    ///
    /// May only be called on a freshly constructed tree.
    pub fn grow<S: AsRef<str>>(&mut self, transactions: &[Vec<S>]) -> Result<(), FpError> {
        if self.nodes.len() != 1 || !self.header.is_empty() {
            return Err(FpError::InvariantViolation {
                detail: "grow() called on a tree that already holds data".to_string(),
            });
        }

        for transaction in transactions {
            for item in dedup(self, transaction) {
                self.header_entry_mut(item).support += 1;
            }
        }
        self.nodes[ROOT].count = transactions.len();

        for transaction in transactions {
            let mut items = dedup(self, transaction);
            self.sort_items(&mut items);
            self.insert_transaction(&items, 1);
        }

        debug!(
            "grew tree over {} transactions: {} distinct items, {} nodes",
            transactions.len(),
            self.header.len(),
            self.nodes.len()
        );
        Ok(())
    }
}

/// Interns a transaction's tokens and drops in-transaction duplicates.
fn dedup<S: AsRef<str>>(tree: &mut FpTree, transaction: &[S]) -> Vec<ItemId> {
    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(transaction.len());
    for token in transaction {
        let item = tree.interner.intern(token.as_ref());
        if seen.insert(item) {
            items.push(item);
        }
    }
    items
}
