//! JSON encoding of `f64` sequences that keeps non-finite values.
//!
//! JSON numbers cannot express NaN or infinity, so those are written as the
//! strings `"NaN"`, `"inf"` and `"-inf"`. Finite values stay plain numbers.
//! Used with `#[serde(with = "crate::float")]` on `Vec<f64>` fields.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const NAN: &str = "NaN";
const INF: &str = "inf";
const NEG_INF: &str = "-inf";

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Special(String),
}

impl From<f64> for Repr {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Self::Special(NAN.into())
        } else if value == f64::INFINITY {
            Self::Special(INF.into())
        } else if value == f64::NEG_INFINITY {
            Self::Special(NEG_INF.into())
        } else {
            Self::Number(value)
        }
    }
}

fn parse_special(raw: &str) -> Option<f64> {
    match raw {
        NAN => Some(f64::NAN),
        INF => Some(f64::INFINITY),
        NEG_INF => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

pub fn serialize<S>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(values.iter().map(|&v| Repr::from(v)))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<Repr>::deserialize(deserializer)?
        .into_iter()
        .map(|repr| match repr {
            Repr::Number(v) => Ok(v),
            Repr::Special(raw) => parse_special(&raw).ok_or_else(|| {
                serde::de::Error::custom(format!(
                    "invalid float {raw:?}, expected a number, {NAN:?}, {INF:?} or {NEG_INF:?}"
                ))
            }),
        })
        .collect()
}
