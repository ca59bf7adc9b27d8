//! Storage backends
//!
//! A backend stores raw strings. Serialization (JSON) is the adapter's
//! responsibility, not the backend's, which keeps this contract free of
//! any encoding concern.

use crate::error::Result;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// String key/value storage contract
///
/// Implementations report faults as [`StorageError`]; the adapter decides
/// how faults surface to the rest of the engine.
pub trait StorageBackend: Send + Sync {
    /// Read a value by key. `Ok(None)` if the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write a value under key, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not a fault.
    fn delete(&self, key: &str) -> Result<()>;
}

/// In-process backend with no durability
///
/// Used directly in tests and as the degraded-mode fallback when the
/// file-backed store cannot be opened.
#[derive(Default)]
pub struct MemoryBackend {
    entries: RwLock<FxHashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.entries.write().unwrap().remove(key);
        Ok(())
    }
}

/// File-backed store: one JSON object mapping keys to string values
///
/// The file is read once at open; every mutation writes the whole map back.
/// The map is small (a handful of preference records), so write-through
/// stays cheap.
pub struct FileBackend {
    path: PathBuf,
    entries: RwLock<FxHashMap<String, String>>,
}

impl FileBackend {
    /// Open a store at `path`, loading existing records. A missing file is
    /// an empty store; a malformed file is a fault.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            FxHashMap::default()
        };
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Default location under the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("skin-savvy").join("storage.json"))
    }

    /// Path this store persists to
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &FxHashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        entries.remove(key);
        self.persist(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_round_trips() {
        let backend = MemoryBackend::new();
        assert!(backend.read("missing").unwrap().is_none());
        backend.write("k", "v").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("v"));
        backend.delete("k").unwrap();
        assert!(backend.read("k").unwrap().is_none());
    }

    #[test]
    fn deleting_absent_key_is_ok() {
        let backend = MemoryBackend::new();
        assert!(backend.delete("never-written").is_ok());
    }
}
