use serde::{Deserialize, Serialize};

use crate::array::NumericArray;
use crate::error::TypeError;
use crate::table::{Series, Table};

/// Comparison category of a golden value.
///
/// Each category carries its own equality policy; see `aurum-compare`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Opaque,
    Array,
    Series,
    Table,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Opaque => write!(f, "opaque"),
            Self::Array => write!(f, "array"),
            Self::Series => write!(f, "series"),
            Self::Table => write!(f, "table"),
        }
    }
}

/// A value that can be stored as a golden object and compared later.
///
/// On disk the variant is recorded next to its payload:
///
/// ```json
/// {"kind": "array", "value": {"shape": [3], "data": [1.0, 2.0, 3.0]}}
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum GoldenValue {
    /// Any structured or scalar value without a specialized policy.
    Opaque(serde_json::Value),
    Array(NumericArray),
    Series(Series),
    Table(Table),
}

impl GoldenValue {
    pub fn category(&self) -> Category {
        match self {
            Self::Opaque(_) => Category::Opaque,
            Self::Array(_) => Category::Array,
            Self::Series(_) => Category::Series,
            Self::Table(_) => Category::Table,
        }
    }

    /// Check the structural invariants of array and table payloads.
    pub fn validate(&self) -> Result<(), TypeError> {
        match self {
            Self::Array(array) => array.validate(),
            Self::Table(table) => table.validate(),
            Self::Opaque(_) | Self::Series(_) => Ok(()),
        }
    }
}

impl From<serde_json::Value> for GoldenValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Opaque(value)
    }
}

impl From<NumericArray> for GoldenValue {
    fn from(array: NumericArray) -> Self {
        Self::Array(array)
    }
}

impl From<Series> for GoldenValue {
    fn from(series: Series) -> Self {
        Self::Series(series)
    }
}

impl From<Table> for GoldenValue {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, ColumnData};
    use serde_json::json;

    #[test]
    fn category_of_each_variant() {
        assert_eq!(GoldenValue::from(json!({"a": 1})).category(), Category::Opaque);
        assert_eq!(
            GoldenValue::from(NumericArray::from_vec(vec![1.0])).category(),
            Category::Array
        );
        assert_eq!(
            GoldenValue::from(Series::new(None, ColumnData::Int(vec![1]))).category(),
            Category::Series
        );
        assert_eq!(
            GoldenValue::from(Table::new(Vec::new()).unwrap()).category(),
            Category::Table
        );
    }

    #[test]
    fn tagged_json_layout() {
        let value = GoldenValue::from(NumericArray::from_vec(vec![1.0, 2.0]));
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(
            json,
            json!({"kind": "array", "value": {"shape": [2], "data": [1.0, 2.0]}})
        );
    }

    #[test]
    fn opaque_json_layout() {
        let value = GoldenValue::from(json!([1, "two", null]));
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, json!({"kind": "opaque", "value": [1, "two", null]}));
    }

    #[test]
    fn table_parses_from_json() {
        let raw = json!({
            "kind": "table",
            "value": {"columns": [
                {"name": "id", "data": {"dtype": "int", "values": [1, 2]}},
                {"name": "ok", "data": {"dtype": "bool", "values": [true, false]}}
            ]}
        });
        let value: GoldenValue = serde_json::from_value(raw).unwrap();
        let GoldenValue::Table(table) = &value else {
            panic!("expected table, got {:?}", value.category());
        };
        assert_eq!(table.row_count(), 2);
        assert!(value.validate().is_ok());
    }

    #[test]
    fn validate_catches_ragged_table_from_json() {
        let raw = json!({
            "kind": "table",
            "value": {"columns": [
                {"name": "id", "data": {"dtype": "int", "values": [1, 2]}},
                {"name": "ok", "data": {"dtype": "bool", "values": [true]}}
            ]}
        });
        let value: GoldenValue = serde_json::from_value(raw).unwrap();
        assert!(matches!(value.validate(), Err(TypeError::RaggedColumn { .. })));
    }

    #[test]
    fn validate_accepts_well_formed_table() {
        let table = Table::new(vec![Column::new("x", ColumnData::Float(vec![0.5]))]).unwrap();
        assert!(GoldenValue::from(table).validate().is_ok());
    }
}
