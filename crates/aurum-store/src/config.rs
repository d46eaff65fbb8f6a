use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Settings for a [`DirectoryStore`](crate::DirectoryStore).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding one file per golden object.
    pub root: PathBuf,
    /// File extension (without the dot) of stored golden objects.
    pub extension: String,
    /// Write human-readable, indented JSON.
    pub pretty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("test_objects"),
            extension: "json".into(),
            pretty: true,
        }
    }
}

impl StoreConfig {
    /// Default settings rooted at `root`.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Parse settings from TOML; missing keys take their defaults.
    pub fn from_toml_str(raw: &str) -> StoreResult<Self> {
        toml::from_str(raw).map_err(|e| StoreError::Config(e.to_string()))
    }
}
