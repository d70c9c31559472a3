//! Persistence errors.

use rqstrack_core::GrantError;

/// Error raised while reading or writing grant data files.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// The file could not be opened, created or renamed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV structure itself was unreadable.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row was structurally fine but held an unusable value.
    #[error("line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },

    /// The loaded rows violated a store invariant.
    #[error(transparent)]
    Store(#[from] GrantError),
}
