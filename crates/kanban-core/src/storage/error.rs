//! Storage errors

use thiserror::Error;

/// Result type for storage-touching operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures writing to a storage backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend cannot be reached at all (e.g. storage disabled)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A write or remove was rejected (e.g. quota exceeded)
    #[error("failed to write slot {key}: {message}")]
    Write { key: String, message: String },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
