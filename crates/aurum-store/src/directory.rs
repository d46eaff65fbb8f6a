//! Filesystem-backed golden store.
//!
//! On-disk layout:
//! ```text
//! <root>/
//!   <name>.<ext>     one JSON-encoded GoldenValue per file
//! ```
//! There is no manifest; the directory listing is the index. New files are
//! written to a temporary file in `<root>` and then linked into place without
//! clobbering, so an existing golden object is never replaced.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use aurum_types::{validate_golden_name, GoldenValue};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::naming::name_of;
use crate::set::{GoldenSet, SaveReport};
use crate::traits::GoldenStore;

/// A golden store holding one `<name>.<ext>` file per golden object.
#[derive(Clone, Debug)]
pub struct DirectoryStore {
    config: StoreConfig,
}

impl DirectoryStore {
    /// Open a store with the given settings. The directory is not touched
    /// until the first operation.
    pub fn open(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Open a store rooted at `root` with default settings.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self::open(StoreConfig::at(root))
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Location of the file backing `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.config
            .root
            .join(format!("{name}.{}", self.config.extension))
    }

    /// Every file in the root carrying the configured extension, sorted by
    /// file name. A missing root yields no entries.
    fn entry_paths(&self) -> StoreResult<Vec<PathBuf>> {
        if !self.config.root.is_dir() {
            debug!(root = %self.config.root.display(), "golden directory missing");
            return Ok(Vec::new());
        }

        let ext = OsStr::new(&self.config.extension);
        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.config.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(io::Error::from)?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension() != Some(ext) {
                debug!(path = %path.display(), "skipping non-golden entry");
                continue;
            }
            paths.push(path.to_path_buf());
        }
        Ok(paths)
    }

    fn read_value(&self, name: &str, path: &Path) -> StoreResult<GoldenValue> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Serialization {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }

    /// Write `value` under `name` unless a file already exists there.
    ///
    /// Returns `false` when the name was taken.
    fn write_new(&self, name: &str, value: &GoldenValue) -> StoreResult<bool> {
        let encoded = if self.config.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        }
        .map_err(|e| StoreError::Serialization {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        let mut tmp = tempfile::Builder::new()
            .prefix(".aurum-")
            .suffix(".tmp")
            .tempfile_in(&self.config.root)?;
        tmp.write_all(&encoded)?;
        tmp.as_file().sync_all()?;

        let path = self.path_for(name);
        match tmp.persist_noclobber(&path) {
            Ok(_) => {
                debug!(name, path = %path.display(), bytes = encoded.len(), "golden object written");
                Ok(true)
            }
            Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(e.error.into()),
        }
    }
}

impl GoldenStore for DirectoryStore {
    fn save(&self, entries: &[(GoldenValue, &str)]) -> StoreResult<SaveReport> {
        for (_, name) in entries {
            validate_golden_name(name)?;
        }
        std::fs::create_dir_all(&self.config.root)?;

        let mut existing: BTreeSet<String> = self.names()?.into_iter().collect();
        let mut report = SaveReport::default();
        for (value, name) in entries {
            let name = *name;
            if existing.contains(name) || !self.write_new(name, value)? {
                warn!(name, "golden object already exists; not overwriting");
                report.skipped.push(name.to_string());
                continue;
            }
            existing.insert(name.to_string());
            report.written.push(name.to_string());
        }

        info!(
            written = report.written.len(),
            skipped = report.skipped.len(),
            root = %self.config.root.display(),
            "golden save complete"
        );
        Ok(report)
    }

    fn load_one(&self, name: &str) -> StoreResult<GoldenValue> {
        validate_golden_name(name)?;
        self.read_value(name, &self.path_for(name))
    }

    fn load_all(&self) -> StoreResult<GoldenSet> {
        let mut entries: BTreeMap<String, (PathBuf, GoldenValue)> = BTreeMap::new();
        for path in self.entry_paths()? {
            let name = name_of(&path.to_string_lossy())?;
            let value = self.read_value(&name, &path)?;
            match entries.entry(name) {
                Entry::Vacant(slot) => {
                    debug!(name = %slot.key(), "golden object loaded");
                    slot.insert((path, value));
                }
                Entry::Occupied(slot) => {
                    return Err(StoreError::DuplicateName {
                        name: slot.key().clone(),
                        first: slot.get().0.clone(),
                        second: path,
                    });
                }
            }
        }

        info!(count = entries.len(), root = %self.config.root.display(), "golden objects loaded");
        Ok(entries
            .into_iter()
            .map(|(name, (_, value))| (name, value))
            .collect())
    }

    fn names(&self) -> StoreResult<Vec<String>> {
        let mut names = self
            .entry_paths()?
            .iter()
            .map(|path| name_of(&path.to_string_lossy()))
            .collect::<StoreResult<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }

    fn contains(&self, name: &str) -> StoreResult<bool> {
        validate_golden_name(name)?;
        Ok(self.path_for(name).is_file())
    }
}
