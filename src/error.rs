//! Error types for account storage.

use thiserror::Error;

/// Errors raised by the account store and its storage backends.
#[derive(Debug, Error)]
pub enum Error {
    /// The persisted snapshot is not valid JSON of the expected shape.
    #[error("Malformed account data: {0}")]
    MalformedData(#[source] serde_json::Error),

    /// The in-memory list could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Reading a key from the backing storage failed.
    #[error("Failed to read '{key}' from storage: {source}")]
    StorageRead {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing a key to the backing storage failed.
    #[error("Failed to write '{key}' to storage: {source}")]
    StorageWrite {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The storage has no room left for the value.
    #[error("Storage quota exceeded writing '{key}': need {needed} bytes, {available} available")]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },

    /// The key cannot be used by this storage backend.
    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
