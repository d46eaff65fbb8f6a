use std::path::PathBuf;

use aurum_types::TypeError;

/// Errors from golden store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No golden object is stored under this name.
    #[error("golden object not found: {0}")]
    NotFound(String),

    /// The name cannot be used as a golden name.
    #[error(transparent)]
    InvalidName(#[from] TypeError),

    /// A storage identifier has no usable file stem.
    #[error("cannot derive a golden name from identifier {0:?}")]
    InvalidIdentifier(String),

    /// Two stored entries resolve to the same golden name.
    #[error("duplicate golden name {name:?} ({first} and {second})")]
    DuplicateName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Serialization or deserialization failure.
    #[error("serialization error for {name:?}: {reason}")]
    Serialization { name: String, reason: String },

    /// Configuration file could not be parsed.
    #[error("invalid store configuration: {0}")]
    Config(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
