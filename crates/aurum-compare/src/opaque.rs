//! Structural equality for opaque values.
//!
//! Numbers compare by value, so `2` and `2.0` are equal; everything else
//! compares exactly, with object key order ignored.
//!
//! Uses the `similar` crate to attach a unified diff of the two values'
//! pretty-printed JSON so a failure shows what changed.

use serde_json::Value;
use similar::TextDiff;

use crate::outcome::Mismatch;

/// Lines of unchanged context shown around each change.
const CONTEXT_RADIUS: usize = 3;

/// Compare two opaque values structurally.
pub fn compare_opaque(expected: &Value, actual: &Value) -> Option<Mismatch> {
    if values_equal(expected, actual) {
        return None;
    }
    Some(Mismatch::Value {
        diff: render_diff(expected, actual),
    })
}

fn values_equal(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Number(e), Value::Number(a)) => {
            if e.is_f64() || a.is_f64() {
                e.as_f64() == a.as_f64()
            } else {
                e == a
            }
        }
        (Value::Array(e), Value::Array(a)) => {
            e.len() == a.len() && e.iter().zip(a).all(|(e, a)| values_equal(e, a))
        }
        (Value::Object(e), Value::Object(a)) => {
            e.len() == a.len()
                && e.iter()
                    .all(|(key, e)| a.get(key).is_some_and(|a| values_equal(e, a)))
        }
        _ => expected == actual,
    }
}

fn render_diff(expected: &Value, actual: &Value) -> String {
    // Serializing a `Value` cannot fail; fall back to compact form regardless.
    let old = serde_json::to_string_pretty(expected).unwrap_or_else(|_| expected.to_string());
    let new = serde_json::to_string_pretty(actual).unwrap_or_else(|_| actual.to_string());
    unified_diff(&(old + "\n"), &(new + "\n"))
}

fn unified_diff(old: &str, new: &str) -> String {
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(CONTEXT_RADIUS)
        .header("golden", "candidate")
        .to_string()
}
