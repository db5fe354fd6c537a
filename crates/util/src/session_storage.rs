//! Session-scoped key/value persistence.
//!
//! This module exposes a `sessionStorage`-shaped abstraction so the palette and
//! theme stores can be tested without a real backend, along with a JSON-backed
//! implementation that keeps every key of the session in a single file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::{debug, warn};

use crate::paths::{default_session_path, expand_tilde};

/// Errors surfaced when the session backend cannot be read or written.
///
/// Callers treat every variant as "persistence unavailable" and keep working
/// from in-memory state.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O failure while reading or writing the session file.
    #[error("session storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("session storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Shared trait implemented by session persistence backends.
pub trait SessionStorage: Send + Sync {
    /// Retrieve the raw value stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// JSON-backed session storage persisted on disk.
pub struct JsonSessionStorage {
    path: PathBuf,
    items: Mutex<BTreeMap<String, String>>,
}

impl JsonSessionStorage {
    /// Open the session at the provided path (or the default path when omitted).
    ///
    /// A missing file starts an empty session. A corrupt file is logged and
    /// replaced on the next write.
    pub fn new<P: Into<Option<PathBuf>>>(path: P) -> Result<Self, StorageError> {
        let resolved_path = match path.into() {
            Some(path) => expand_tilde(&path.to_string_lossy()),
            None => default_session_path(),
        };

        let items = load_session_file(&resolved_path)?;
        debug!(path = %resolved_path.display(), keys = items.len(), "opened session storage");
        Ok(Self {
            path: resolved_path,
            items: Mutex::new(items),
        })
    }

    /// Access the underlying session file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Discard every key and delete the backing file.
    pub fn end_session(&self) -> Result<(), StorageError> {
        let mut items = self.items.lock().expect("session lock poisoned");
        items.clear();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(StorageError::Io(error)),
        }
    }

    fn save_locked(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SessionStorage for JsonSessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().expect("session lock poisoned");
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().expect("session lock poisoned");
        items.insert(key.to_string(), value.to_string());
        self.save_locked(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().expect("session lock poisoned");
        if items.remove(key).is_some() {
            self.save_locked(&items)?;
        }
        Ok(())
    }
}

/// In-memory session storage used by tests and as the degraded fallback.
#[derive(Default)]
pub struct InMemorySessionStorage {
    items: Mutex<BTreeMap<String, String>>,
}

impl InMemorySessionStorage {
    /// Create an empty in-memory session.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for InMemorySessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().expect("session lock poisoned");
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().expect("session lock poisoned");
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().expect("session lock poisoned");
        items.remove(key);
        Ok(())
    }
}

/// Open the on-disk session, falling back to an in-memory one if the file
/// cannot be read.
pub fn open_session_or_ephemeral(path: Option<PathBuf>) -> Arc<dyn SessionStorage> {
    match JsonSessionStorage::new(path) {
        Ok(storage) => Arc::new(storage),
        Err(error) => {
            warn!(error = %error, "Session storage unavailable; keeping state in memory only");
            Arc::new(InMemorySessionStorage::new())
        }
    }
}

fn load_session_file(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(items) => Ok(items),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse session file; starting a fresh session"
                );
                Ok(BTreeMap::new())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
        Err(error) => Err(StorageError::Io(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn in_memory_storage_round_trip() {
        let storage = InMemorySessionStorage::new();
        assert!(storage.get_item("vyra-theme").unwrap().is_none());

        storage.set_item("vyra-theme", "light").unwrap();
        assert_eq!(storage.get_item("vyra-theme").unwrap().as_deref(), Some("light"));

        storage.remove_item("vyra-theme").unwrap();
        storage.remove_item("vyra-theme").unwrap();
        assert!(storage.get_item("vyra-theme").unwrap().is_none());
    }

    #[test]
    fn json_storage_persists_items() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");
        let storage = JsonSessionStorage::new(Some(path.clone())).unwrap();
        storage.set_item("vyra-palette", "[\"#FF0000\"]").unwrap();

        drop(storage);
        let reloaded = JsonSessionStorage::new(Some(path)).unwrap();
        assert_eq!(
            reloaded.get_item("vyra-palette").unwrap().as_deref(),
            Some("[\"#FF0000\"]")
        );
    }

    #[test]
    fn invalid_json_starts_empty_session() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let storage = JsonSessionStorage::new(Some(path)).unwrap();
        assert!(storage.get_item("vyra-palette").unwrap().is_none());
    }

    #[test]
    fn end_session_removes_file_and_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        let storage = JsonSessionStorage::new(Some(path.clone())).unwrap();
        storage.set_item("vyra-theme", "dark").unwrap();
        assert!(path.exists());

        storage.end_session().unwrap();
        assert!(!path.exists());
        assert!(storage.get_item("vyra-theme").unwrap().is_none());
        storage.end_session().unwrap();
    }

    #[test]
    fn unreadable_path_falls_back_to_memory() {
        let dir = tempdir().unwrap();
        // A directory cannot be read as a session file.
        let storage = open_session_or_ephemeral(Some(dir.path().to_path_buf()));
        storage.set_item("vyra-theme", "light").unwrap();
        assert_eq!(storage.get_item("vyra-theme").unwrap().as_deref(), Some("light"));
    }
}
