//! Durable key-value slots.
//!
//! A [`PersistedStore`] is the only thing the cart knows about durability:
//! named slots holding strings. The repository injects one explicitly, so
//! tests run against [`MemoryStore`] and the command line against
//! [`FileStore`].

use std::collections::{BTreeMap, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by a store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON object of strings.
    #[error("store file {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The slots could not be encoded.
    #[error("failed to encode store: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A durable set of named string slots.
pub trait PersistedStore {
    /// Read a slot. `Ok(None)` means the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite a slot.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the value cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PersistedStore + ?Sized> PersistedStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-process store, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot.
    #[must_use]
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl PersistedStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store backed by a single JSON file mapping slot keys to values.
///
/// Every write rewrites the whole file through a sibling temporary file and
/// a rename, so readers never observe a half-written file. A missing file
/// reads as empty.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_slots(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PersistedStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_slots()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut slots = match self.read_slots() {
            Ok(slots) => slots,
            Err(e @ StoreError::Corrupt { .. }) => {
                tracing::warn!(error = %e, "discarding corrupt store file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        slots.insert(key.to_owned(), value.to_owned());
        let encoded = serde_json::to_string_pretty(&slots)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, encoded).map_err(|e| self.io_error(e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), key, "store slot written");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("cart").unwrap(), None);

        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));

        store.set("cart", "[1]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_memory_store_with_value() {
        let store = MemoryStore::new().with_value("cart", "not json");
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("not json"));
        assert_eq!(store.get("other").unwrap(), None);
    }

    #[test]
    fn test_mut_ref_is_a_store() {
        fn write_empty<S: PersistedStore>(mut store: S) {
            store.set("cart", "[]").unwrap();
        }

        let mut store = MemoryStore::new();
        write_empty(&mut store);
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("store.json"));
        assert_eq!(store.get("cart").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut store = FileStore::new(&path);
        store.set("cart", "[]").unwrap();
        store.set("other", "x").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("cart").unwrap().as_deref(), Some("[]"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = FileStore::new(&path);
        assert!(matches!(store.get("cart"), Err(StoreError::Corrupt { .. })));

        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
    }
}
