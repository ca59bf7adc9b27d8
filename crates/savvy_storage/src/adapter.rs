//! Never-fails storage surface
//!
//! Every visual flow reads and writes preferences through this adapter. A
//! styling utility must never take the application down because the disk
//! is full or a record is garbled, so each backend fault is logged and
//! collapsed to an absent value or a `false` acknowledgement here - callers
//! never branch on an error.

use crate::backend::{FileBackend, MemoryBackend, StorageBackend};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Key-value persistence with safe degradation
pub struct StorageAdapter {
    backend: Box<dyn StorageBackend>,
}

impl StorageAdapter {
    /// Wrap an explicit backend
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Adapter over an in-process map with no durability
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Adapter over the file-backed store at its platform-default location
    ///
    /// Falls back to in-memory operation when the store cannot be opened:
    /// preferences keep working for the rest of the process, just not
    /// durably across restarts.
    pub fn open_default() -> Self {
        let Some(path) = FileBackend::default_path() else {
            tracing::warn!("no platform config directory; storage is in-memory only");
            return Self::in_memory();
        };
        match FileBackend::open(&path) {
            Ok(backend) => Self::new(backend),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "storage unavailable; continuing in-memory");
                Self::in_memory()
            }
        }
    }

    /// Read a string value. Absent keys and backend faults both yield `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.backend.read(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, %err, "storage read failed");
                None
            }
        }
    }

    /// Write a string value. Returns whether the record was persisted.
    pub fn set(&self, key: &str, value: &str) -> bool {
        match self.backend.write(key, value) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(key, %err, "storage write failed");
                false
            }
        }
    }

    /// Remove a record. Returns whether the removal was persisted.
    pub fn remove(&self, key: &str) -> bool {
        match self.backend.delete(key) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(key, %err, "storage remove failed");
                false
            }
        }
    }

    /// Read and JSON-decode a stored value
    ///
    /// A record that does not decode as `T` is treated as absent; callers
    /// fall back to their defaults.
    pub fn get_object<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, %err, "stored value is not valid JSON for the requested type");
                None
            }
        }
    }

    /// JSON-encode and write a value. Returns whether the record was persisted.
    pub fn set_object<T: Serialize>(&self, key: &str, value: &T) -> bool {
        match serde_json::to_string(value) {
            Ok(encoded) => self.set(key, &encoded),
            Err(err) => {
                tracing::warn!(key, %err, "value could not be encoded for storage");
                false
            }
        }
    }
}
