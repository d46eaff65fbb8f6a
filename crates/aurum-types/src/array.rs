use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A dense, row-major, n-dimensional array of `f64`.
///
/// A zero-dimensional (scalar) array has an empty shape and exactly one
/// element. NaN and infinities are stored as the strings `"NaN"`, `"inf"`
/// and `"-inf"`. Fields are private so that values built in code always satisfy
/// `shape.iter().product() == data.len()`; deserialized arrays are checked
/// with [`NumericArray::validate`] before use.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumericArray {
    shape: Vec<usize>,
    #[serde(with = "crate::float")]
    data: Vec<f64>,
}

impl NumericArray {
    /// Build an array, checking that `data` fills `shape` exactly.
    pub fn new(shape: Vec<usize>, data: Vec<f64>) -> Result<Self, TypeError> {
        let array = Self { shape, data };
        array.validate()?;
        Ok(array)
    }

    /// One-dimensional array from a vector.
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self {
            shape: vec![data.len()],
            data,
        }
    }

    /// Zero-dimensional array holding a single value.
    pub fn scalar(value: f64) -> Self {
        Self {
            shape: Vec::new(),
            data: vec![value],
        }
    }

    /// Check the shape/data invariant.
    pub fn validate(&self) -> Result<(), TypeError> {
        let expected = self.element_count();
        if expected != self.data.len() {
            return Err(TypeError::ShapeMismatch {
                shape: self.shape.clone(),
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Number of elements implied by the shape.
    pub fn element_count(&self) -> usize {
        self.shape.iter().product()
    }

    /// Convert a flat (row-major) offset into a multi-dimensional index.
    pub fn unravel(&self, mut flat: usize) -> Vec<usize> {
        let mut index = vec![0; self.shape.len()];
        for (axis, &dim) in self.shape.iter().enumerate().rev() {
            if dim == 0 {
                continue;
            }
            index[axis] = flat % dim;
            flat /= dim;
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_accepts_consistent_shape() {
        let arr = NumericArray::new(vec![2, 3], vec![0.0; 6]).unwrap();
        assert_eq!(arr.ndim(), 2);
        assert_eq!(arr.element_count(), 6);
    }

    #[test]
    fn new_rejects_inconsistent_shape() {
        let err = NumericArray::new(vec![2, 3], vec![0.0; 5]).unwrap_err();
        assert_eq!(
            err,
            TypeError::ShapeMismatch {
                shape: vec![2, 3],
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn scalar_has_empty_shape() {
        let arr = NumericArray::scalar(4.5);
        assert_eq!(arr.ndim(), 0);
        assert_eq!(arr.element_count(), 1);
        assert!(arr.validate().is_ok());
    }

    #[test]
    fn empty_dimension_holds_no_elements() {
        let arr = NumericArray::new(vec![0, 4], Vec::new()).unwrap();
        assert_eq!(arr.element_count(), 0);
    }

    #[test]
    fn unravel_row_major() {
        let arr = NumericArray::new(vec![2, 3], vec![0.0; 6]).unwrap();
        assert_eq!(arr.unravel(0), vec![0, 0]);
        assert_eq!(arr.unravel(2), vec![0, 2]);
        assert_eq!(arr.unravel(4), vec![1, 1]);
    }

    #[test]
    fn deserialized_array_is_revalidated() {
        let arr: NumericArray =
            serde_json::from_str(r#"{"shape":[3],"data":[1.0,2.0]}"#).unwrap();
        assert!(arr.validate().is_err());
    }

    #[test]
    fn non_finite_elements_round_trip_through_json() {
        let arr = NumericArray::from_vec(vec![1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY]);
        let text = serde_json::to_string(&arr).unwrap();
        assert!(text.contains("\"NaN\""));

        let back: NumericArray = serde_json::from_str(&text).unwrap();
        assert_eq!(back.shape(), &[4]);
        assert!(back.data()[1].is_nan());
        assert_eq!(back.data()[2], f64::INFINITY);
        assert_eq!(back.data()[3], f64::NEG_INFINITY);
    }

    proptest! {
        #[test]
        fn from_vec_always_valid(data in proptest::collection::vec(-1e6f64..1e6, 0..64)) {
            let arr = NumericArray::from_vec(data.clone());
            prop_assert!(arr.validate().is_ok());
            prop_assert_eq!(arr.shape(), &[data.len()][..]);
        }
    }
}
