//! Storage backends for session snapshots.
//!
//! Two implementations of the core `SnapshotStorage` contract:
//!
//! - [`JsonFileStorage`]: one JSON file per key under a base directory. This
//!   is the durable backend used in production.
//! - [`MemoryStorage`]: a plain in-memory map. Used by tests, and as the
//!   degraded fallback when no file-backed storage is usable.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use zooscore_core::error::{Result, ZooscoreError};
use zooscore_core::session::SnapshotStorage;

use crate::paths::ZooscorePaths;

/// File-backed snapshot storage: each key maps to `<base_dir>/<key>.json`.
///
/// Keys are used verbatim as the file name, so a key must be a plain file
/// name component without path separators; keys containing one would resolve
/// outside `base_dir`.
///
/// The base directory is created on the first write, not at construction, so
/// building a storage never touches the file system.
pub struct JsonFileStorage {
    base_dir: PathBuf,
}

impl JsonFileStorage {
    /// Creates a storage rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Creates a storage rooted at the platform snapshot directory
    /// (`~/.config/zooscore/snapshots` on Linux).
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(ZooscorePaths::snapshot_dir()?))
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl SnapshotStorage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.file_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| ZooscoreError::io(format!("Failed to read {:?}: {}", path, e)))?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if !self.base_dir.exists() {
            fs::create_dir_all(&self.base_dir).map_err(|e| {
                ZooscoreError::io(format!(
                    "Failed to create snapshot directory {:?}: {}",
                    self.base_dir, e
                ))
            })?;
        }

        let path = self.file_path(key);
        fs::write(&path, value)
            .map_err(|e| ZooscoreError::io(format!("Failed to write {:?}: {}", path, e)))?;
        Ok(())
    }
}

/// In-memory snapshot storage.
///
/// The interior `RwLock` exists only so the storage can be shared behind an
/// `Arc`; the store's mutation model is single-threaded.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| ZooscoreError::data_access(format!("Storage lock poisoned: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| ZooscoreError::data_access(format!("Storage lock poisoned: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
