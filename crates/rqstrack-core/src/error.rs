//! Error type for store operations.

use crate::record::RecordId;

/// Error returned by grant store operations.
///
/// Every variant is recoverable: the store is left exactly as it was before
/// the failing call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrantError {
    /// A required field was missing, a value was out of range, or a label
    /// was outside its vocabulary.
    #[error("validation error: {0}")]
    Validation(String),

    /// An add referenced an id that is already in the store.
    #[error("RQS {0} already exists")]
    DuplicateId(RecordId),

    /// An update referenced an id that is not in the store.
    #[error("RQS {0} not found")]
    NotFound(RecordId),
}

impl GrantError {
    pub(crate) fn missing(field: &str) -> Self {
        Self::Validation(format!("{field} is required"))
    }
}
