use std::collections::BTreeMap;

use aurum_types::GoldenValue;

/// An owned, immutable snapshot of every golden object in a store.
///
/// Produced once by [`GoldenStore::load_all`](crate::GoldenStore::load_all);
/// the caller decides how long it lives and may reload or replace it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GoldenSet {
    entries: BTreeMap<String, GoldenValue>,
}

impl GoldenSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&GoldenValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GoldenValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<BTreeMap<String, GoldenValue>> for GoldenSet {
    fn from(entries: BTreeMap<String, GoldenValue>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, GoldenValue)> for GoldenSet {
    fn from_iter<I: IntoIterator<Item = (String, GoldenValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Per-entry result of a [`GoldenStore::save`](crate::GoldenStore::save) batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SaveReport {
    /// Names that were newly written.
    pub written: Vec<String>,
    /// Names skipped because a golden object already existed.
    pub skipped: Vec<String>,
}

impl SaveReport {
    /// Returns `true` if every entry in the batch was written.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
