//! Table and series comparison.
//!
//! Tables are matched column-by-name, so column order is irrelevant; row
//! order within each column is significant.

use std::collections::BTreeSet;

use aurum_types::{Series, Table};

use crate::column::{compare_columns, Tolerance};
use crate::outcome::Mismatch;

/// Compare two tables ignoring column order.
///
/// Checks, in order: the set of column names, the row count, then each
/// golden column against the candidate column of the same name.
pub fn compare_tables(expected: &Table, actual: &Table, tolerance: Tolerance) -> Option<Mismatch> {
    let expected_names: BTreeSet<&str> = expected.column_names().collect();
    let actual_names: BTreeSet<&str> = actual.column_names().collect();

    if expected_names != actual_names {
        return Some(Mismatch::Columns {
            missing: expected_names
                .difference(&actual_names)
                .map(|s| s.to_string())
                .collect(),
            unexpected: actual_names
                .difference(&expected_names)
                .map(|s| s.to_string())
                .collect(),
        });
    }

    if expected.row_count() != actual.row_count() {
        return Some(Mismatch::Length {
            column: None,
            expected: expected.row_count(),
            actual: actual.row_count(),
        });
    }

    expected.columns().iter().find_map(|golden| {
        let candidate = actual.column(&golden.name)?;
        compare_columns(Some(golden.name.as_str()), &golden.data, &candidate.data, tolerance)
    })
}

/// Compare two series: name first, then values.
pub fn compare_series(expected: &Series, actual: &Series, tolerance: Tolerance) -> Option<Mismatch> {
    if expected.name != actual.name {
        return Some(Mismatch::SeriesName {
            expected: expected.name.clone(),
            actual: actual.name.clone(),
        });
    }
    compare_columns(None, &expected.data, &actual.data, tolerance)
}
