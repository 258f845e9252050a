use log::debug;

use crate::fp::error::FpError;
use crate::fp::items::ItemId;
use crate::fp::tree::{FpTree, ROOT};

/// Outcome of a support check.
///
/// `Missing` is kept separate from `Infrequent` so diagnostics can tell an
/// item that never occurred apart from one that is merely rare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupportCheck {
    Frequent { support: usize },
    Infrequent { support: usize },
    Missing { item: String },
}

impl SupportCheck {
    pub fn is_frequent(&self) -> bool {
        matches!(self, SupportCheck::Frequent { .. })
    }

    /// Counted support, when every queried item was present.
    pub fn support(&self) -> Option<usize> {
        match self {
            SupportCheck::Frequent { support } | SupportCheck::Infrequent { support } => {
                Some(*support)
            }
            SupportCheck::Missing { .. } => None,
        }
    }
}

impl FpTree {
    /// Whether the itemset's support meets the tree's threshold.
    pub fn is_frequent<S: AsRef<str>>(&self, itemset: &[S]) -> Result<bool, FpError> {
        Ok(self.check_support(itemset)?.is_frequent())
    }

    /// Counts the itemset's support along the anchor item's occurrence
    /// chain and compares it against the threshold.
    ///
    /// Any queried item absent from the header short-circuits to `Missing`;
    /// any single item already below the threshold short-circuits to
    /// `Infrequent`, since the whole set can only be rarer.
    pub fn check_support<S: AsRef<str>>(&self, itemset: &[S]) -> Result<SupportCheck, FpError> {
        let mut items = Vec::with_capacity(itemset.len());
        for token in itemset {
            let token = token.as_ref();
            let Some(id) = self.interner.get(token).filter(|id| self.header.contains_key(id))
            else {
                debug!("item `{}` has not been found in the database", token);
                return Ok(SupportCheck::Missing {
                    item: token.to_string(),
                });
            };
            let support = self.support_of_id(id);
            if support < self.min_support {
                debug!(
                    "item `{}` has support {} below the threshold {}",
                    token, support, self.min_support
                );
                return Ok(SupportCheck::Infrequent { support });
            }
            if !items.contains(&id) {
                items.push(id);
            }
        }

        let support = if items.is_empty() {
            0
        } else if items.len() == 1 {
            self.support_of_id(items[0])
        } else {
            self.sort_items(&mut items);
            // Ancestors of an occurrence read deepest-first, the reverse
            // of the canonical order.
            items.reverse();
            self.chain_support(&items)?
        };

        debug!("support of {:?} is {}", self.resolve_tokens(&items), support);
        if support >= self.min_support {
            Ok(SupportCheck::Frequent { support })
        } else {
            Ok(SupportCheck::Infrequent { support })
        }
    }

    /// Sums path frequencies over the anchor's occurrence chain.
    ///
    /// `reversed` holds the itemset in reverse canonical order; its head is
    /// the anchor (the least-frequent, deepest item). For each occurrence
    /// the remaining items are matched in sequence against ancestor labels
    /// on the way to the root; only a fully matched path contributes, and it
    /// contributes the occurrence's full path frequency. This relies on
    /// every path in the tree respecting the global order.
    fn chain_support(&self, reversed: &[ItemId]) -> Result<usize, FpError> {
        let anchor = reversed[0];
        let remaining = &reversed[1..];

        let mut total = 0;
        let mut occurrence = self.header.get(&anchor).and_then(|entry| entry.chain_head);

        let mut steps = 0;
        while let Some(id) = occurrence {
            steps += 1;
            if steps > self.nodes.len() {
                return Err(FpError::InvariantViolation {
                    detail: format!(
                        "occurrence chain for `{}` cycles",
                        self.interner.token(anchor)
                    ),
                });
            }

            let mut pos = 0;
            let mut current = self.nodes[id].parent;
            while pos < remaining.len() {
                let Some(ancestor) = current else { break };
                if ancestor == ROOT {
                    break;
                }
                if self.nodes[ancestor].item == Some(remaining[pos]) {
                    pos += 1;
                }
                current = self.nodes[ancestor].parent;
            }
            if pos == remaining.len() {
                total += self.nodes[id].count;
            }

            occurrence = self.nodes[id].next_link;
        }

        Ok(total)
    }

    fn resolve_tokens(&self, items: &[ItemId]) -> Vec<&str> {
        items.iter().map(|&item| self.interner.token(item)).collect()
    }
}
