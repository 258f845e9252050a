pub mod conditional;
pub mod dataset;
pub mod display;
pub mod error;
pub mod growth;
pub(crate) mod items;
pub mod mining;
pub mod prefix;
pub mod support;
pub mod tree;

#[cfg(test)]
mod proptests;

pub use error::FpError;
pub use items::ItemId;
pub use mining::Mined;
pub use prefix::PatternBase;
pub use support::SupportCheck;
pub use tree::{FpTree, ItemOrder, NodeId};
