//! Comparison verdicts and how they are presented.

use std::fmt;

use aurum_types::{Category, Dtype};
use serde::{Deserialize, Serialize};

/// The verdict of a single comparison.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The candidate matches its golden object.
    Pass,
    /// The candidate does not match, or there is nothing to match against.
    Fail(FailReason),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// The failure reason, if any.
    pub fn reason(&self) -> Option<&FailReason> {
        match self {
            Self::Pass => None,
            Self::Fail(reason) => Some(reason),
        }
    }

    /// Render the verdict with the given message templates.
    pub fn render<'a>(&self, messages: &'a OutcomeMessages) -> &'a str {
        match self {
            Self::Pass => &messages.pass,
            Self::Fail(_) => &messages.fail,
        }
    }
}

/// Why a comparison failed.
#[derive(Clone, Debug, PartialEq)]
pub enum FailReason {
    /// No golden object is stored under the requested name.
    NotFound { name: String },
    /// The candidate differs from the golden object.
    Mismatch(Mismatch),
}

impl fmt::Display for FailReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name } => write!(f, "golden object not found: {name}"),
            Self::Mismatch(m) => write!(f, "{m}"),
        }
    }
}

/// A specific difference between a candidate and its golden object.
///
/// `column` is `None` for a series and `Some(name)` for a table column.
#[derive(Clone, Debug, PartialEq)]
pub enum Mismatch {
    /// Candidate and golden object belong to different categories.
    Category { expected: Category, actual: Category },
    /// Opaque values differ; carries a unified diff of their JSON renderings.
    Value { diff: String },
    /// Array shapes differ.
    Shape {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    /// Array elements differ.
    Elements {
        first_index: Vec<usize>,
        expected: f64,
        actual: f64,
        differing: usize,
        total: usize,
    },
    /// Series names differ.
    SeriesName {
        expected: Option<String>,
        actual: Option<String>,
    },
    /// Table column sets differ.
    Columns {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
    /// Row counts differ.
    Length {
        column: Option<String>,
        expected: usize,
        actual: usize,
    },
    /// Element types differ.
    Dtype {
        column: Option<String>,
        expected: Dtype,
        actual: Dtype,
    },
    /// Cell values differ.
    Values {
        column: Option<String>,
        first_row: usize,
        expected: String,
        actual: String,
        differing: usize,
    },
}

fn column_label(column: &Option<String>) -> String {
    match column {
        Some(name) => format!("column {name:?}"),
        None => "series".to_string(),
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category { expected, actual } => {
                write!(f, "category differs: golden is {expected}, candidate is {actual}")
            }
            Self::Value { diff } => write!(f, "values differ:\n{diff}"),
            Self::Shape { expected, actual } => {
                write!(f, "shape differs: golden {expected:?}, candidate {actual:?}")
            }
            Self::Elements {
                first_index,
                expected,
                actual,
                differing,
                total,
            } => write!(
                f,
                "{differing}/{total} elements differ; first at {first_index:?}: golden {expected}, candidate {actual}"
            ),
            Self::SeriesName { expected, actual } => {
                write!(f, "series name differs: golden {expected:?}, candidate {actual:?}")
            }
            Self::Columns {
                missing,
                unexpected,
            } => write!(
                f,
                "columns differ: missing {missing:?}, unexpected {unexpected:?}"
            ),
            Self::Length {
                column,
                expected,
                actual,
            } => write!(
                f,
                "{} length differs: golden {expected}, candidate {actual}",
                column_label(column)
            ),
            Self::Dtype {
                column,
                expected,
                actual,
            } => write!(
                f,
                "{} dtype differs: golden {expected}, candidate {actual}",
                column_label(column)
            ),
            Self::Values {
                column,
                first_row,
                expected,
                actual,
                differing,
            } => write!(
                f,
                "{}: {differing} values differ; first at row {first_row}: golden {expected}, candidate {actual}",
                column_label(column)
            ),
        }
    }
}

/// Message templates shown for each verdict.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutcomeMessages {
    pub pass: String,
    pub fail: String,
}

impl Default for OutcomeMessages {
    fn default() -> Self {
        Self {
            pass: "Hey, you did it. Good job.".into(),
            fail: "Try again".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_messages_render() {
        let messages = OutcomeMessages::default();
        assert_eq!(Outcome::Pass.render(&messages), "Hey, you did it. Good job.");
        let fail = Outcome::Fail(FailReason::NotFound { name: "x".into() });
        assert_eq!(fail.render(&messages), "Try again");
    }

    #[test]
    fn custom_messages_render() {
        let messages = OutcomeMessages {
            pass: "ok".into(),
            fail: "FAILED".into(),
        };
        assert_eq!(Outcome::Pass.render(&messages), "ok");
        let fail = Outcome::Fail(FailReason::Mismatch(Mismatch::Value { diff: String::new() }));
        assert_eq!(fail.render(&messages), "FAILED");
    }

    #[test]
    fn reason_accessors() {
        assert!(Outcome::Pass.is_pass());
        assert!(Outcome::Pass.reason().is_none());

        let fail = Outcome::Fail(FailReason::NotFound { name: "totals".into() });
        assert!(!fail.is_pass());
        assert_eq!(fail.reason().unwrap().to_string(), "golden object not found: totals");
    }

    #[test]
    fn mismatch_descriptions() {
        let shape = Mismatch::Shape {
            expected: vec![3],
            actual: vec![2, 2],
        };
        assert_eq!(shape.to_string(), "shape differs: golden [3], candidate [2, 2]");

        let values = Mismatch::Values {
            column: Some("price".into()),
            first_row: 4,
            expected: "1.5".into(),
            actual: "1.75".into(),
            differing: 2,
        };
        assert_eq!(
            values.to_string(),
            "column \"price\": 2 values differ; first at row 4: golden 1.5, candidate 1.75"
        );

        let length = Mismatch::Length {
            column: None,
            expected: 3,
            actual: 4,
        };
        assert_eq!(length.to_string(), "series length differs: golden 3, candidate 4");
    }
}
