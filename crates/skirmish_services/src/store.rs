//! Persisted key-value preference store

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while reading or writing the preference file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access preference file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("preference file '{path}' is not a JSON object of strings: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode preferences: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Flat string-to-string preference map.
///
/// Every preference is stored as text; typed views live in
/// [`crate::settings`]. Reading a key that was never written yields `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceStore {
    values: BTreeMap<String, String>,
    dirty: bool,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from `path`. A missing file is a fresh, empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::info!("No preference file at {}, using defaults", path.display());
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let values = serde_json::from_str(&text).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded preferences from {}", path.display());
        Ok(Self {
            values,
            dirty: false,
        })
    }

    /// Write the store to `path` as pretty JSON and clear the dirty flag.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let io_err = |source: io::Error| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(&self.values).map_err(StoreError::Encode)?;
        fs::write(path, text).map_err(io_err)?;

        self.dirty = false;
        tracing::debug!("Saved {} preferences to {}", self.values.len(), path.display());
        Ok(())
    }

    /// Raw value for `key`, or `""` if unset.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if self.values.get(key) == Some(&value) {
            return;
        }
        tracing::trace!(key, value = %value, "preference changed");
        self.values.insert(key.to_string(), value);
        self.dirty = true;
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// True when a value changed since the last load or save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_empty() {
        let store = PreferenceStore::new();
        assert_eq!(store.get("turbo"), "");
        assert!(!store.contains("turbo"));
    }

    #[test]
    fn set_marks_dirty_only_on_change() {
        let mut store = PreferenceStore::new();
        store.set("grid", "yes");
        assert!(store.is_dirty());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        store.save(&path).unwrap();
        assert!(!store.is_dirty());

        store.set("grid", "yes");
        assert!(!store.is_dirty());
        store.set("grid", "no");
        assert!(store.is_dirty());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut store = PreferenceStore::new();
        store.set("scroll", "75");
        store.set("sound", "no");
        store.save(&path).unwrap();

        let loaded = PreferenceStore::load(&path).unwrap();
        assert_eq!(loaded.get("scroll"), "75");
        assert_eq!(loaded.get("sound"), "no");
        assert!(!loaded.is_dirty());
    }

    #[test]
    fn missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::load(dir.path().join("absent.json")).unwrap();
        assert_eq!(store.iter().count(), 0);
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let err = PreferenceStore::load(&path).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }
}
