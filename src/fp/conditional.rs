use log::debug;

use crate::fp::error::FpError;
use crate::fp::prefix::PatternBase;
use crate::fp::tree::{FpTree, HeaderEntry, ROOT};

impl FpTree {
    /// Builds the conditional FP-Tree for a pattern base: a fresh tree over
    /// the sub-database of transactions containing the mined item, with that
    /// item removed from every path.
    ///
    /// Header supports are aggregated from the full base first; then every
    /// path whose weight meets the threshold is inserted as-is. Paths are
    /// never re-sorted by the conditional tree's own local supports.
    pub fn build_conditional(&self, base: &PatternBase) -> Result<FpTree, FpError> {
        let mut tree = FpTree::new_conditional(self.min_support, self.order, self.interner.clone());

        for (item, weight) in base.item_weights() {
            tree.header.insert(
                item,
                HeaderEntry {
                    support: weight,
                    chain_head: None,
                },
            );
        }

        for (path, weight) in base.iter() {
            for &item in path {
                // Aggregation above covered every path, so a miss here can
                // only be a construction bug.
                if !tree.header.contains_key(&item) {
                    return Err(FpError::InvariantViolation {
                        detail: format!(
                            "item `{}` appears in a prefix path but not in the aggregated header",
                            self.interner.token(item)
                        ),
                    });
                }
            }
            if weight >= tree.min_support {
                tree.insert_transaction(path, weight);
                tree.nodes[ROOT].count += weight;
            }
        }

        debug!(
            "conditional tree: {} paths in base, {} items, {} nodes",
            base.len(),
            tree.header.len(),
            tree.nodes.len()
        );
        Ok(tree)
    }
}
