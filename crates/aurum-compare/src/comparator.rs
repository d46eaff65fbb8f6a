//! Category dispatch over a loaded golden set.

use aurum_store::{GoldenSet, GoldenStore};
use aurum_types::GoldenValue;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::array::compare_arrays;
use crate::column::Tolerance;
use crate::error::{CompareError, CompareResult};
use crate::opaque::compare_opaque;
use crate::outcome::{FailReason, Mismatch, Outcome, OutcomeMessages};
use crate::table::{compare_series, compare_tables};

/// Comparison settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Tolerance for float cells in series and tables. Arrays are always exact.
    pub tolerance: Tolerance,
    /// Messages shown for pass and fail verdicts.
    pub messages: OutcomeMessages,
}

/// Compare a candidate against a golden value, dispatching on the golden
/// value's category.
///
/// Both values must already satisfy their structural invariants.
pub fn compare_values(
    golden: &GoldenValue,
    candidate: &GoldenValue,
    tolerance: Tolerance,
) -> Option<Mismatch> {
    match (golden, candidate) {
        (GoldenValue::Opaque(g), GoldenValue::Opaque(c)) => compare_opaque(g, c),
        (GoldenValue::Array(g), GoldenValue::Array(c)) => compare_arrays(g, c),
        (GoldenValue::Series(g), GoldenValue::Series(c)) => compare_series(g, c, tolerance),
        (GoldenValue::Table(g), GoldenValue::Table(c)) => compare_tables(g, c, tolerance),
        _ => Some(Mismatch::Category {
            expected: golden.category(),
            actual: candidate.category(),
        }),
    }
}

/// Answers "does this value match its golden object?" for a loaded set.
///
/// The comparator owns its [`GoldenSet`]; build a new one to pick up
/// changes on disk.
#[derive(Clone, Debug)]
pub struct Comparator {
    goldens: GoldenSet,
    config: CompareConfig,
}

impl Comparator {
    /// Comparator with default settings.
    pub fn new(goldens: GoldenSet) -> Self {
        Self::with_config(goldens, CompareConfig::default())
    }

    pub fn with_config(goldens: GoldenSet, config: CompareConfig) -> Self {
        Self { goldens, config }
    }

    /// Load every golden object from `store` and build a comparator over them.
    pub fn from_store(store: &dyn GoldenStore, config: CompareConfig) -> CompareResult<Self> {
        let goldens = store.load_all()?;
        Ok(Self::with_config(goldens, config))
    }

    pub fn goldens(&self) -> &GoldenSet {
        &self.goldens
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compare `candidate` with the golden object stored as `name`.
    ///
    /// A missing golden object or any difference is a [`Outcome::Fail`].
    /// Structurally malformed values are returned as errors.
    pub fn compare(&self, candidate: &GoldenValue, name: &str) -> CompareResult<Outcome> {
        let Some(golden) = self.goldens.get(name) else {
            info!(name, "no golden object to compare against");
            return Ok(Outcome::Fail(FailReason::NotFound {
                name: name.to_string(),
            }));
        };

        candidate
            .validate()
            .map_err(|source| CompareError::MalformedCandidate {
                name: name.to_string(),
                source,
            })?;
        golden
            .validate()
            .map_err(|source| CompareError::MalformedGolden {
                name: name.to_string(),
                category: golden.category(),
                source,
            })?;

        match compare_values(golden, candidate, self.config.tolerance) {
            None => {
                debug!(name, category = %golden.category(), "golden comparison passed");
                Ok(Outcome::Pass)
            }
            Some(mismatch) => {
                info!(name, category = %golden.category(), %mismatch, "golden comparison failed");
                Ok(Outcome::Fail(FailReason::Mismatch(mismatch)))
            }
        }
    }

    /// Compare and render the verdict with the configured messages.
    pub fn check(&self, candidate: &GoldenValue, name: &str) -> CompareResult<&str> {
        let outcome = self.compare(candidate, name)?;
        Ok(outcome.render(&self.config.messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurum_store::InMemoryGoldenStore;
    use aurum_types::{Category, Column, ColumnData, NumericArray, Series, Table, TypeError};
    use serde_json::json;

    fn array(data: &[f64]) -> GoldenValue {
        NumericArray::from_vec(data.to_vec()).into()
    }

    fn table(cols: Vec<Column>) -> GoldenValue {
        Table::new(cols).unwrap().into()
    }

    fn comparator() -> Comparator {
        let store = InMemoryGoldenStore::new();
        store
            .save(&[
                (array(&[1.0, 2.0, 3.0]), "arr"),
                (GoldenValue::from(json!({"answer": 42})), "obj"),
                (
                    table(vec![
                        Column::new("a", ColumnData::Int(vec![1, 2])),
                        Column::new("b", ColumnData::Text(vec!["x".into(), "y".into()])),
                    ]),
                    "tbl",
                ),
                (
                    Series::new(Some("s".into()), ColumnData::Float(vec![0.5])).into(),
                    "ser",
                ),
            ])
            .unwrap();
        Comparator::from_store(&store, CompareConfig::default()).unwrap()
    }

    #[test]
    fn array_pass_and_fail() {
        let cmp = comparator();
        assert_eq!(cmp.compare(&array(&[1.0, 2.0, 3.0]), "arr").unwrap(), Outcome::Pass);
        assert!(!cmp.compare(&array(&[1.0, 2.0, 4.0]), "arr").unwrap().is_pass());
        assert!(!cmp.compare(&array(&[1.0, 2.0]), "arr").unwrap().is_pass());
    }

    #[test]
    fn opaque_pass_and_fail() {
        let cmp = comparator();
        assert!(cmp.compare(&json!({"answer": 42}).into(), "obj").unwrap().is_pass());
        assert!(!cmp.compare(&json!({"answer": 41}).into(), "obj").unwrap().is_pass());
    }

    #[test]
    fn table_with_permuted_columns_passes() {
        let cmp = comparator();
        let candidate = table(vec![
            Column::new("b", ColumnData::Text(vec!["x".into(), "y".into()])),
            Column::new("a", ColumnData::Int(vec![1, 2])),
        ]);
        assert!(cmp.compare(&candidate, "tbl").unwrap().is_pass());
    }

    #[test]
    fn table_with_changed_cell_fails() {
        let cmp = comparator();
        let candidate = table(vec![
            Column::new("b", ColumnData::Text(vec!["x".into(), "z".into()])),
            Column::new("a", ColumnData::Int(vec![1, 2])),
        ]);
        assert!(!cmp.compare(&candidate, "tbl").unwrap().is_pass());
    }

    #[test]
    fn series_pass() {
        let cmp = comparator();
        let candidate: GoldenValue = Series::new(Some("s".into()), ColumnData::Float(vec![0.5])).into();
        assert!(cmp.compare(&candidate, "ser").unwrap().is_pass());
    }

    #[test]
    fn missing_golden_is_not_found_failure() {
        let cmp = comparator();
        let outcome = cmp.compare(&array(&[1.0]), "nope").unwrap();
        assert_eq!(
            outcome,
            Outcome::Fail(FailReason::NotFound {
                name: "nope".into()
            })
        );
    }

    #[test]
    fn category_mismatch_fails() {
        let cmp = comparator();
        let outcome = cmp.compare(&json!([1.0, 2.0, 3.0]).into(), "arr").unwrap();
        assert_eq!(
            outcome,
            Outcome::Fail(FailReason::Mismatch(Mismatch::Category {
                expected: Category::Array,
                actual: Category::Opaque
            }))
        );
    }

    #[test]
    fn malformed_candidate_is_an_error() {
        let cmp = comparator();
        let bad: NumericArray = serde_json::from_value(json!({"shape": [4], "data": [1.0]})).unwrap();
        let err = cmp.compare(&bad.into(), "arr").unwrap_err();
        assert!(matches!(
            err,
            CompareError::MalformedCandidate {
                source: TypeError::ShapeMismatch { .. },
                ..
            }
        ));
    }

    #[test]
    fn malformed_golden_is_an_error() {
        let bad: GoldenValue = serde_json::from_value(json!({
            "kind": "table",
            "value": {"columns": [
                {"name": "a", "data": {"dtype": "int", "values": [1]}},
                {"name": "a", "data": {"dtype": "int", "values": [2]}}
            ]}
        }))
        .unwrap();
        let goldens: GoldenSet = [("dup".to_string(), bad)].into_iter().collect();
        let cmp = Comparator::new(goldens);

        let candidate = table(vec![Column::new("a", ColumnData::Int(vec![1]))]);
        let err = cmp.compare(&candidate, "dup").unwrap_err();
        assert!(matches!(err, CompareError::MalformedGolden { category: Category::Table, .. }));
    }

    #[test]
    fn check_renders_literal_messages() {
        let cmp = comparator();
        assert_eq!(cmp.check(&array(&[1.0, 2.0, 3.0]), "arr").unwrap(), "Hey, you did it. Good job.");
        assert_eq!(cmp.check(&array(&[1.0, 2.0, 4.0]), "arr").unwrap(), "Try again");
        assert_eq!(cmp.check(&array(&[1.0]), "missing").unwrap(), "Try again");
    }

    #[test]
    fn configured_tolerance_and_messages() {
        let goldens: GoldenSet = [(
            "t".to_string(),
            table(vec![Column::new("x", ColumnData::Float(vec![1.0]))]),
        )]
        .into_iter()
        .collect();
        let config = CompareConfig {
            tolerance: Tolerance::exact(),
            messages: OutcomeMessages {
                pass: "PASS".into(),
                fail: "FAIL".into(),
            },
        };
        let cmp = Comparator::with_config(goldens, config);

        let near = table(vec![Column::new("x", ColumnData::Float(vec![1.0 + 1e-9]))]);
        assert_eq!(cmp.check(&near, "t").unwrap(), "FAIL");
        let exact = table(vec![Column::new("x", ColumnData::Float(vec![1.0]))]);
        assert_eq!(cmp.check(&exact, "t").unwrap(), "PASS");
    }

    #[test]
    fn compare_config_from_toml() {
        let config: CompareConfig = toml::from_str(
            "[tolerance]\nrtol = 0.001\n\n[messages]\npass = \"ok\"\n",
        )
        .unwrap();
        assert_eq!(config.tolerance.rtol, 0.001);
        assert_eq!(config.tolerance.atol, 1e-8);
        assert_eq!(config.messages.pass, "ok");
        assert_eq!(config.messages.fail, "Try again");
    }
}
