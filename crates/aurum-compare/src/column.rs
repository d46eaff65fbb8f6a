//! Column-level comparison shared by series and tables.

use aurum_types::ColumnData;
use serde::{Deserialize, Serialize};

use crate::outcome::Mismatch;

/// Relative and absolute tolerance for floating-point cells.
///
/// Two finite values match when `|actual - expected| <= atol + rtol * |expected|`.
/// NaN matches NaN and infinities match only themselves.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    pub rtol: f64,
    pub atol: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            rtol: 1e-5,
            atol: 1e-8,
        }
    }
}

impl Tolerance {
    /// Zero tolerance: values must be identical (NaN still matches NaN).
    pub const fn exact() -> Self {
        Self {
            rtol: 0.0,
            atol: 0.0,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.rtol == 0.0 && self.atol == 0.0
    }

    pub fn matches(&self, expected: f64, actual: f64) -> bool {
        if expected.is_nan() || actual.is_nan() {
            return expected.is_nan() && actual.is_nan();
        }
        if expected == actual {
            return true;
        }
        if expected.is_infinite() || actual.is_infinite() {
            return false;
        }
        (actual - expected).abs() <= self.atol + self.rtol * expected.abs()
    }
}

/// Compare two typed columns: dtype, then length, then every cell in order.
///
/// Returns the first kind of difference found.
pub fn compare_columns(
    column: Option<&str>,
    expected: &ColumnData,
    actual: &ColumnData,
    tolerance: Tolerance,
) -> Option<Mismatch> {
    let label = || column.map(str::to_owned);
    let dtype_mismatch = || Mismatch::Dtype {
        column: label(),
        expected: expected.dtype(),
        actual: actual.dtype(),
    };

    if expected.dtype() != actual.dtype() {
        return Some(dtype_mismatch());
    }
    if expected.len() != actual.len() {
        return Some(Mismatch::Length {
            column: label(),
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    let differing_rows = match (expected, actual) {
        (ColumnData::Float(e), ColumnData::Float(a)) => {
            differing(e, a, |x, y| tolerance.matches(*x, *y))
        }
        (ColumnData::Int(e), ColumnData::Int(a)) => differing(e, a, |x, y| x == y),
        (ColumnData::Bool(e), ColumnData::Bool(a)) => differing(e, a, |x, y| x == y),
        (ColumnData::Text(e), ColumnData::Text(a)) => differing(e, a, |x, y| x == y),
        _ => return Some(dtype_mismatch()),
    };

    let first_row = *differing_rows.first()?;
    Some(Mismatch::Values {
        column: label(),
        first_row,
        expected: expected.display_at(first_row).unwrap_or_default(),
        actual: actual.display_at(first_row).unwrap_or_default(),
        differing: differing_rows.len(),
    })
}

fn differing<T>(expected: &[T], actual: &[T], eq: impl Fn(&T, &T) -> bool) -> Vec<usize> {
    expected
        .iter()
        .zip(actual)
        .enumerate()
        .filter(|(_, (e, a))| !eq(e, a))
        .map(|(row, _)| row)
        .collect()
}
