use log::debug;

use crate::fp::error::FpError;
use crate::fp::prefix::PatternBase;
use crate::fp::tree::FpTree;

/// Result of mining one item: either its conditional FP-Tree, ready for
/// further recursive mining, or the raw pattern base for inspection.
#[derive(Debug, Clone)]
pub enum Mined {
    Tree(FpTree),
    PatternBase(PatternBase),
}

impl FpTree {
    /// Mines one item: collects its conditional pattern base and, when
    /// `build_subtree` is set, builds the conditional tree from it.
    ///
    /// The caller drives the recursion by mining items of the returned tree
    /// in turn; a conditional tree can be dropped as soon as its subtree has
    /// been explored. Fails with [`FpError::ItemNotFound`] when the item
    /// never occurred in this tree's database.
    pub fn mine(&self, item: &str, build_subtree: bool) -> Result<Mined, FpError> {
        let id = self
            .interner
            .get(item)
            .filter(|id| self.header.contains_key(id))
            .ok_or_else(|| FpError::ItemNotFound {
                item: item.to_string(),
            })?;

        let base = self.collect_prefix_base(id)?;
        debug!("pattern base for `{}`: {} prefixes", item, base.len());

        if build_subtree {
            Ok(Mined::Tree(self.build_conditional(&base)?))
        } else {
            Ok(Mined::PatternBase(base))
        }
    }
}
