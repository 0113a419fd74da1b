//! JSON-file-backed key-value store for desktop persistence.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{KeyValueStore, StorageError};

/// Durable store holding the whole key-value map in a single JSON file.
///
/// Every `set`/`remove` rewrites the file synchronously, so a successful
/// call means the mutation is on disk. The cart's persistence model assumes
/// exactly this: no write-behind buffering.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RefCell<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open (or create) a store at the given path.
    ///
    /// An existing file that does not parse is treated as corrupt and
    /// replaced with an empty map on the next write; the previous content
    /// is not recoverable, so we log loudly.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create storage directory at {parent:?}"))?;
        }

        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(err) => {
                    tracing::error!("corrupt storage file at {path:?}, starting empty: {err}");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read storage file at {path:?}"));
            }
        };

        Ok(Self {
            path,
            entries: RefCell::new(entries),
        })
    }

    /// Open a store at the default OS data directory:
    /// `{app_data_dir}/zentro/storage.json`.
    pub fn open_default() -> anyhow::Result<Self> {
        Self::open(default_path()?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let payload = serde_json::to_string_pretty(&*self.entries.borrow())?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        self.flush()
    }
}

/// Resolve the default storage path: `{app_data_dir}/zentro/storage.json`.
fn default_path() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory")?;

    let mut dir = base;
    dir.push("zentro");
    dir.push("storage.json");
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.set("zentro_cart", "[]").unwrap();
            store.set("token", "abc123").unwrap();
        }

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("zentro_cart").unwrap().as_deref(), Some("[]"));
        assert_eq!(reopened.get("token").unwrap().as_deref(), Some("abc123"));
    }

    #[test]
    fn remove_is_durable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.set("token", "abc123").unwrap();
            store.remove("token").unwrap();
        }

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("token").unwrap(), None);
    }

    #[test]
    fn corrupt_file_opens_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not valid json").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn missing_parent_directories_are_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("storage.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set("k", "v").unwrap();
        assert!(path.exists());
    }
}
