//! SkinSavvy Storage
//!
//! Local key-value persistence behind a surface that never raises.
//!
//! # Overview
//!
//! - [`StorageBackend`]: string key/value contract with in-memory and
//!   file-backed implementations
//! - [`StorageAdapter`]: the never-fails surface the rest of the engine
//!   talks to - backend faults are logged and collapsed to `None`/`false`
//! - [`ApiKeyVault`]: process-wide holder for the user-supplied API key,
//!   persisted through the same adapter
//! - [`keys`]: the well-known record keys
//!
//! # Quick Start
//!
//! ```rust
//! use savvy_storage::{keys, StorageAdapter};
//!
//! let storage = StorageAdapter::in_memory();
//! storage.set(keys::HAS_PREVIOUS_APPS, "true");
//! assert_eq!(storage.get(keys::HAS_PREVIOUS_APPS).as_deref(), Some("true"));
//! ```
//!
//! Values are plain strings; structured data goes through
//! [`StorageAdapter::get_object`] / [`StorageAdapter::set_object`], which
//! JSON-encode around the string primitives. A persistence fault is never
//! surfaced to callers as an error - the engine keeps working from memory.

pub mod adapter;
pub mod backend;
pub mod error;
pub mod keys;
pub mod vault;

pub use adapter::StorageAdapter;
pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::{Result, StorageError};
pub use vault::ApiKeyVault;
