use thiserror::Error;

/// Failures surfaced by tree construction, mining and the dataset reader.
///
/// A below-threshold itemset is not an error; it is reported through
/// [`SupportCheck`](crate::fp::SupportCheck) so callers can tell it apart
/// from an item that never occurred at all.
#[derive(Debug, Error)]
pub enum FpError {
    /// The requested item never appeared in any transaction.
    #[error("item `{item}` has not been found in the database")]
    ItemNotFound { item: String },

    /// A transaction record carried no items at all.
    #[error("transaction on line {line} is empty or unparsable")]
    MalformedTransaction { line: usize },

    /// A structural invariant no longer holds; the tree cannot be trusted.
    #[error("invariant violation: {detail}")]
    InvariantViolation { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
