use thiserror::Error;

/// Errors produced when constructing or validating golden values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid golden name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("array shape {shape:?} holds {expected} elements, got {actual}")]
    ShapeMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    #[error("column {column:?} has {actual} rows, expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate column name: {0:?}")]
    DuplicateColumn(String),
}
