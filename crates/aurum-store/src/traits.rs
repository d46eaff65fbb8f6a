use aurum_types::GoldenValue;

use crate::error::StoreResult;
use crate::set::{GoldenSet, SaveReport};

/// Name-keyed store of golden objects.
///
/// All implementations must satisfy these invariants:
/// - Golden objects are never overwritten. Saving under an existing name is
///   skipped and reported, not an error.
/// - Every name returned by [`names`](Self::names) loads successfully or the
///   failure is propagated; nothing is silently dropped.
/// - A store with no entries (including a missing directory) loads as an
///   empty [`GoldenSet`].
pub trait GoldenStore {
    /// Save a batch of `(value, name)` pairs.
    ///
    /// Names that already exist are skipped and listed in
    /// [`SaveReport::skipped`]; the rest of the batch is still written.
    /// Returns `Err` on an invalid name or I/O failure.
    fn save(&self, entries: &[(GoldenValue, &str)]) -> StoreResult<SaveReport>;

    /// Load a single golden object.
    ///
    /// Returns `StoreError::NotFound` if nothing is stored under `name`.
    fn load_one(&self, name: &str) -> StoreResult<GoldenValue>;

    /// Load every golden object into an owned set.
    fn load_all(&self) -> StoreResult<GoldenSet>;

    /// All stored names, sorted.
    fn names(&self) -> StoreResult<Vec<String>>;

    /// Check whether a golden object exists under `name`.
    ///
    /// Default implementation scans [`names`](Self::names). Backends may
    /// override with a direct lookup.
    fn contains(&self, name: &str) -> StoreResult<bool> {
        Ok(self.names()?.iter().any(|n| n == name))
    }
}
