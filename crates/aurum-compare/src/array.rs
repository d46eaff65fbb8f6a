//! Strict element-wise comparison of numeric arrays.

use aurum_types::NumericArray;

use crate::outcome::Mismatch;

/// Compare two arrays element by element.
///
/// Shapes must match exactly. Elements are compared without tolerance;
/// NaN at the same position counts as equal, and `0.0` equals `-0.0`.
/// Both arrays are expected to satisfy their shape invariant.
pub fn compare_arrays(expected: &NumericArray, actual: &NumericArray) -> Option<Mismatch> {
    if expected.shape() != actual.shape() {
        return Some(Mismatch::Shape {
            expected: expected.shape().to_vec(),
            actual: actual.shape().to_vec(),
        });
    }

    let mut differing = 0usize;
    let mut first: Option<usize> = None;
    for (i, (e, a)) in expected.data().iter().zip(actual.data()).enumerate() {
        let same = e == a || (e.is_nan() && a.is_nan());
        if !same {
            differing += 1;
            first.get_or_insert(i);
        }
    }

    let first = first?;
    Some(Mismatch::Elements {
        first_index: expected.unravel(first),
        expected: expected.data()[first],
        actual: actual.data()[first],
        differing,
        total: expected.data().len(),
    })
}
