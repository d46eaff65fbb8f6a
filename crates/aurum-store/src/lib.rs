//! Golden-object storage for Aurum.
//!
//! A golden store persists named reference values that later test runs are
//! compared against. Each golden object is addressed by a plain name, and the
//! whole store is materialized once into an owned [`GoldenSet`] for the
//! comparator to consult.
//!
//! # Storage Backends
//!
//! All backends implement the [`GoldenStore`] trait:
//!
//! - [`DirectoryStore`] -- one `<name>.<ext>` JSON file per golden object
//! - [`InMemoryGoldenStore`] -- `BTreeMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Golden objects are never overwritten; conflicting saves are skipped and reported.
//! 2. Loading is explicit: callers own the [`GoldenSet`] and decide when to reload.
//! 3. A missing or empty store loads as an empty set.
//! 4. Names derived from storage identifiers must be unique; duplicates fail the load.
//! 5. All I/O and decoding errors are propagated, never silently ignored.

pub mod config;
pub mod directory;
pub mod error;
pub mod memory;
pub mod naming;
pub mod set;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use config::StoreConfig;
pub use directory::DirectoryStore;
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryGoldenStore;
pub use naming::name_of;
pub use set::{GoldenSet, SaveReport};
pub use traits::GoldenStore;
