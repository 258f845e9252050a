use std::collections::HashMap;

use crate::fp::error::FpError;
use crate::fp::items::ItemId;
use crate::fp::tree::{FpTree, ROOT};

/// Conditional pattern base for one item: the prefix paths leading to each
/// of its occurrences, with the occurrence's path frequency as weight.
///
/// Entries keep first-seen order so that conditional trees built from the
/// base are deterministic. Within one tree repeated identical paths cannot
/// arise (sibling labels are unique, so two distinct nodes never share the
/// full label path from the root), but `add` sums weights anyway: summing is
/// the semantics that agrees with a brute-force transaction count.
#[derive(Debug, Clone, Default)]
pub struct PatternBase {
    entries: Vec<(Vec<ItemId>, usize)>,
    index: HashMap<Vec<ItemId>, usize>,
}

impl PatternBase {
    pub(crate) fn add(&mut self, path: Vec<ItemId>, weight: usize) {
        match self.index.get(&path) {
            Some(&slot) => self.entries[slot].1 += weight,
            None => {
                self.index.insert(path.clone(), self.entries.len());
                self.entries.push((path, weight));
            }
        }
    }

    /// Prefix paths with their weights, in first-seen (chain) order.
    pub fn iter(&self) -> impl Iterator<Item = (&[ItemId], usize)> {
        self.entries.iter().map(|(path, weight)| (path.as_slice(), *weight))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aggregated weight per item, summed over every path containing it.
    pub fn item_weights(&self) -> HashMap<ItemId, usize> {
        let mut weights = HashMap::new();
        for (path, weight) in self.iter() {
            for &item in path {
                *weights.entry(item).or_insert(0) += weight;
            }
        }
        weights
    }
}

impl FpTree {
    /// Collects the conditional pattern base for `item` by walking its
    /// occurrence chain and, per occurrence, ascending parent links to the
    /// root. Paths read root-to-leaf and exclude both the occurrence's own
    /// label and the root sentinel; occurrences sitting directly under the
    /// root contribute no path.
    ///
    /// An item without a chain (never inserted) yields an empty base. A
    /// chain longer than the arena can only mean a cycle and fails loudly.
    pub fn collect_prefix_base(&self, item: ItemId) -> Result<PatternBase, FpError> {
        let mut base = PatternBase::default();
        let mut occurrence = self.header.get(&item).and_then(|entry| entry.chain_head);

        let mut steps = 0;
        while let Some(id) = occurrence {
            steps += 1;
            if steps > self.nodes.len() {
                return Err(FpError::InvariantViolation {
                    detail: format!(
                        "occurrence chain for `{}` cycles",
                        self.interner.token(item)
                    ),
                });
            }

            let mut path = Vec::new();
            let mut current = self.nodes[id].parent;
            while let Some(ancestor) = current {
                if ancestor == ROOT {
                    break;
                }
                if let Some(label) = self.nodes[ancestor].item {
                    path.push(label);
                }
                current = self.nodes[ancestor].parent;
            }
            path.reverse();

            if !path.is_empty() {
                base.add(path, self.nodes[id].count);
            }
            occurrence = self.nodes[id].next_link;
        }

        Ok(base)
    }
}
