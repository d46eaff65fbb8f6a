//! Labeled one- and two-dimensional values: [`Series`] and [`Table`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Element type of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dtype {
    Float,
    Int,
    Bool,
    Text,
}

impl std::fmt::Display for Dtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float => write!(f, "float"),
            Self::Int => write!(f, "int"),
            Self::Bool => write!(f, "bool"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// A homogeneous, typed column of values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "dtype", content = "values", rename_all = "snake_case")]
pub enum ColumnData {
    /// Non-finite values are encoded as strings; see [`NumericArray`](crate::NumericArray).
    Float(#[serde(with = "crate::float")] Vec<f64>),
    Int(Vec<i64>),
    Bool(Vec<bool>),
    Text(Vec<String>),
}

impl ColumnData {
    pub fn dtype(&self) -> Dtype {
        match self {
            Self::Float(_) => Dtype::Float,
            Self::Int(_) => Dtype::Int,
            Self::Bool(_) => Dtype::Bool,
            Self::Text(_) => Dtype::Text,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Float(v) => v.len(),
            Self::Int(v) => v.len(),
            Self::Bool(v) => v.len(),
            Self::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render the value at `row` for diagnostics.
    pub fn display_at(&self, row: usize) -> Option<String> {
        match self {
            Self::Float(v) => v.get(row).map(|x| x.to_string()),
            Self::Int(v) => v.get(row).map(|x| x.to_string()),
            Self::Bool(v) => v.get(row).map(|x| x.to_string()),
            Self::Text(v) => v.get(row).map(|x| format!("{x:?}")),
        }
    }
}

/// A named one-dimensional column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub data: ColumnData,
}

impl Series {
    pub fn new(name: Option<String>, data: ColumnData) -> Self {
        Self { name, data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A single named column inside a [`Table`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// A two-dimensional table of uniquely named, equal-length columns.
///
/// Column order is preserved for display but carries no meaning for
/// equality checks.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table, rejecting duplicate names and ragged columns.
    pub fn new(columns: Vec<Column>) -> Result<Self, TypeError> {
        let table = Self { columns };
        table.validate()?;
        Ok(table)
    }

    /// Check column-name uniqueness and equal column lengths.
    pub fn validate(&self) -> Result<(), TypeError> {
        let mut seen = HashSet::new();
        let rows = self.row_count();
        for column in &self.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(TypeError::DuplicateColumn(column.name.clone()));
            }
            if column.data.len() != rows {
                return Err(TypeError::RaggedColumn {
                    column: column.name.clone(),
                    expected: rows,
                    actual: column.data.len(),
                });
            }
        }
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Row count, taken from the first column (zero for a table without columns).
    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.data.len()).unwrap_or(0)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
