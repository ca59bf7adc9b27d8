//! API key holder
//!
//! One writer path, many readers: the key lives in memory for synchronous
//! access from every consumer in the process and is written through to
//! storage on each update. The key is never validated - any string is
//! accepted, including the empty string, which is how a user clears it.

use crate::adapter::StorageAdapter;
use crate::keys;
use std::sync::{Arc, RwLock};

/// Process-wide holder for the user-supplied API key
pub struct ApiKeyVault {
    storage: Arc<StorageAdapter>,
    key: RwLock<String>,
}

impl ApiKeyVault {
    /// Construct from the persisted value; absent means "never set".
    pub fn load(storage: Arc<StorageAdapter>) -> Self {
        let key = storage.get(keys::OPENAI_API_KEY).unwrap_or_default();
        Self {
            storage,
            key: RwLock::new(key),
        }
    }

    /// Current key; empty string if never set or cleared
    pub fn key(&self) -> String {
        self.key.read().unwrap().clone()
    }

    /// Whether a non-empty key is present
    pub fn has_key(&self) -> bool {
        !self.key.read().unwrap().is_empty()
    }

    /// Replace the key and persist it
    ///
    /// Writes through on every call, even when the value is unchanged. The
    /// new value is visible to all readers of this vault immediately.
    pub fn set_key(&self, value: &str) {
        *self.key.write().unwrap() = value.to_string();
        self.storage.set(keys::OPENAI_API_KEY, value);
        tracing::debug!(present = !value.is_empty(), "api key updated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vault() -> ApiKeyVault {
        ApiKeyVault::load(Arc::new(StorageAdapter::in_memory()))
    }

    #[test]
    fn key_defaults_to_empty() {
        let vault = vault();
        assert_eq!(vault.key(), "");
        assert!(!vault.has_key());
    }

    #[test]
    fn set_key_is_visible_immediately() {
        let vault = vault();
        vault.set_key("sk-test");
        assert_eq!(vault.key(), "sk-test");
        assert!(vault.has_key());
    }

    #[test]
    fn clearing_with_empty_string_is_idempotent() {
        let vault = vault();
        vault.set_key("sk-test");
        vault.set_key("");
        assert_eq!(vault.key(), "");
        vault.set_key("");
        assert_eq!(vault.key(), "");
    }
}
