//! Value model for Aurum golden objects.
//!
//! Every golden object is a [`GoldenValue`], a closed set of variants that
//! each map to one comparison [`Category`]. Every other Aurum crate depends
//! on `aurum-types`.
//!
//! # Key Types
//!
//! - [`GoldenValue`] -- Tagged golden payload (opaque JSON, array, series, table)
//! - [`NumericArray`] -- Shape-bearing row-major `f64` array
//! - [`Series`] -- Optionally named typed column
//! - [`Table`] / [`Column`] / [`ColumnData`] -- Column-labeled two-dimensional data
//! - [`validate_golden_name`] -- Rules for names that double as file stems

pub mod array;
pub mod error;
mod float;
pub mod name;
pub mod table;
pub mod value;

pub use array::NumericArray;
pub use error::TypeError;
pub use name::validate_golden_name;
pub use table::{Column, ColumnData, Dtype, Series, Table};
pub use value::{Category, GoldenValue};
