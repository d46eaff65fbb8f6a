use std::path::Path;

use anyhow::Context;
use aurum_compare::CompareConfig;
use aurum_store::StoreConfig;
use serde::{Deserialize, Serialize};

/// Contents of `aurum.toml`.
///
/// ```toml
/// [store]
/// root = "test_objects"
///
/// [compare.tolerance]
/// rtol = 1e-5
///
/// [compare.messages]
/// pass = "Hey, you did it. Good job."
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AurumConfig {
    pub store: StoreConfig,
    pub compare: CompareConfig,
}

impl AurumConfig {
    /// Load the config file if it exists, otherwise use defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }
}
