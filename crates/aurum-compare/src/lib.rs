//! Golden-object comparison for Aurum.
//!
//! Decides whether a freshly computed value matches its golden counterpart,
//! using an equality policy chosen by the value's category.
//!
//! # Policies
//!
//! - Opaque -- structural `==`; failures carry a unified JSON diff
//! - Array -- exact shape and element-wise equality, no tolerance
//! - Series -- name, dtype, and values; floats within [`Tolerance`]
//! - Table -- same as series per column, matched by name regardless of column order
//!
//! # Key Types
//!
//! - [`Comparator`] / [`CompareConfig`] -- Lookup plus dispatch over a [`GoldenSet`](aurum_store::GoldenSet)
//! - [`Outcome`] / [`FailReason`] / [`Mismatch`] -- Structured verdicts
//! - [`OutcomeMessages`] -- Presentation strings for each verdict

pub mod array;
pub mod column;
pub mod comparator;
pub mod error;
pub mod opaque;
pub mod outcome;
pub mod table;

pub use array::compare_arrays;
pub use column::{compare_columns, Tolerance};
pub use comparator::{compare_values, CompareConfig, Comparator};
pub use error::{CompareError, CompareResult};
pub use opaque::compare_opaque;
pub use outcome::{FailReason, Mismatch, Outcome, OutcomeMessages};
pub use table::{compare_series, compare_tables};
