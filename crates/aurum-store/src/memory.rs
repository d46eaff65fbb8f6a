use std::collections::BTreeMap;
use std::sync::RwLock;

use aurum_types::{validate_golden_name, GoldenValue};
use tracing::warn;

use crate::error::{StoreError, StoreResult};
use crate::set::{GoldenSet, SaveReport};
use crate::traits::GoldenStore;

/// In-memory golden store.
///
/// Intended for tests that want to inject a fake store into a comparator
/// without touching the filesystem. Values are cloned on save and load.
pub struct InMemoryGoldenStore {
    entries: RwLock<BTreeMap<String, GoldenValue>>,
}

impl InMemoryGoldenStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of golden objects currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryGoldenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GoldenStore for InMemoryGoldenStore {
    fn save(&self, entries: &[(GoldenValue, &str)]) -> StoreResult<SaveReport> {
        for (_, name) in entries {
            validate_golden_name(name)?;
        }

        let mut map = self.entries.write().expect("lock poisoned");
        let mut report = SaveReport::default();
        for (value, name) in entries {
            if map.contains_key(*name) {
                warn!(name, "golden object already exists; not overwriting");
                report.skipped.push(name.to_string());
                continue;
            }
            map.insert(name.to_string(), value.clone());
            report.written.push(name.to_string());
        }
        Ok(report)
    }

    fn load_one(&self, name: &str) -> StoreResult<GoldenValue> {
        let map = self.entries.read().expect("lock poisoned");
        map.get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    fn load_all(&self) -> StoreResult<GoldenSet> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(GoldenSet::from(map.clone()))
    }

    fn names(&self) -> StoreResult<Vec<String>> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.keys().cloned().collect())
    }

    fn contains(&self, name: &str) -> StoreResult<bool> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.contains_key(name))
    }
}

impl std::fmt::Debug for InMemoryGoldenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryGoldenStore")
            .field("entry_count", &self.len())
            .finish()
    }
}
