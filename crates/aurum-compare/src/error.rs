//! Error types for the compare crate.
//!
//! Only conditions that are not a verdict end up here. A missing golden
//! object or differing values are reported through
//! [`Outcome`](crate::Outcome), never as an error.

use aurum_types::{Category, TypeError};

/// Errors that can occur while comparing a candidate against a golden object.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    /// The candidate violates its own structural invariants.
    #[error("malformed candidate for {name:?}: {source}")]
    MalformedCandidate { name: String, source: TypeError },

    /// The stored golden object violates its structural invariants.
    #[error("malformed golden object {name:?} ({category}): {source}")]
    MalformedGolden {
        name: String,
        category: Category,
        source: TypeError,
    },

    /// Loading the golden set failed.
    #[error("store error: {0}")]
    Store(#[from] aurum_store::StoreError),
}

/// Convenience alias for compare results.
pub type CompareResult<T> = Result<T, CompareError>;
