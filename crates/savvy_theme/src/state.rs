//! Persisted theme selection
//!
//! `ThemeStore` holds the one active theme id. It has a single writer path
//! (`set_theme`), which writes through to storage and synchronously fans
//! out to subscribers so dependent views redraw with the new palette.
//!
//! Stores are plain constructible values over a shared storage adapter, so
//! tests build isolated instances; hosts that want ambient access install
//! one instance process-wide via [`ThemeStore::install`].

use crate::themes::ThemeId;
use savvy_storage::{keys, StorageAdapter};
use std::sync::{Arc, OnceLock, RwLock};

/// Process-wide store instance, when a host installs one
static THEME_STORE: OnceLock<ThemeStore> = OnceLock::new();

type ThemeSubscriber = Box<dyn Fn(ThemeId) + Send + Sync>;

/// Holder of the active theme, read by every themed view
pub struct ThemeStore {
    storage: Arc<StorageAdapter>,
    active: RwLock<ThemeId>,
    subscribers: RwLock<Vec<ThemeSubscriber>>,
}

impl ThemeStore {
    /// Construct from the persisted theme id.
    ///
    /// Reads storage exactly once, here. An absent or unrecognized id
    /// falls back to [`ThemeId::Default`]; a storage fault behaves like an
    /// absent record, leaving the store usable in-memory.
    pub fn load(storage: Arc<StorageAdapter>) -> Self {
        let active = storage
            .get(keys::THEME)
            .map(|id| ThemeId::from_id_or_default(&id))
            .unwrap_or_default();
        Self {
            storage,
            active: RwLock::new(active),
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Current active theme
    pub fn theme(&self) -> ThemeId {
        *self.active.read().unwrap()
    }

    /// Switch the active theme.
    ///
    /// Persists on every call, even when `next` equals the current value,
    /// then notifies every subscriber synchronously with the new id. A
    /// failed write leaves the in-memory theme active for the rest of the
    /// process.
    pub fn set_theme(&self, next: ThemeId) {
        *self.active.write().unwrap() = next;
        self.storage.set(keys::THEME, next.id());
        tracing::debug!(theme = next.id(), "theme changed");
        for notify in self.subscribers.read().unwrap().iter() {
            notify(next);
        }
    }

    /// Register a callback invoked on every theme change.
    ///
    /// The app layer registers its redraw trigger here.
    pub fn subscribe(&self, callback: impl Fn(ThemeId) + Send + Sync + 'static) {
        self.subscribers.write().unwrap().push(Box::new(callback));
    }

    // ========== Process-wide instance ==========

    /// Install a store as the process-wide instance (call once at app
    /// startup). Returns the installed instance; a second call keeps the
    /// first store and returns it.
    pub fn install(store: ThemeStore) -> &'static ThemeStore {
        let _ = THEME_STORE.set(store);
        Self::global()
    }

    /// Get the process-wide store instance
    pub fn global() -> &'static ThemeStore {
        THEME_STORE
            .get()
            .expect("ThemeStore not installed. Call ThemeStore::install() at app startup.")
    }

    /// Try to get the process-wide store (returns None if not installed)
    pub fn try_global() -> Option<&'static ThemeStore> {
        THEME_STORE.get()
    }
}
