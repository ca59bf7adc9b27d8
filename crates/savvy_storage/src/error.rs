//! Storage error types

use thiserror::Error;

/// Faults a storage backend can report
///
/// These stay internal to the storage layer: the adapter surface collapses
/// every variant to an absent value or a `false` write acknowledgement.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying file I/O failed
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded
    #[error("storage serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backing store is not available on this platform
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;
