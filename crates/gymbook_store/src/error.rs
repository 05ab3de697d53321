//! Error types for the document store

use gymbook_common::GymbookError;
use thiserror::Error;

/// Errors that can occur when reading or rewriting a document
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem error
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The record to modify does not exist
    #[error("{0}")]
    NotFound(String),

    /// The write would break a uniqueness rule of the collection
    #[error("{0}")]
    UniqueViolation(String),
}

impl From<StoreError> for GymbookError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(message) => GymbookError::NotFoundError(message),
            StoreError::UniqueViolation(message) => GymbookError::ConflictError(message),
            other => GymbookError::StorageError(other.to_string()),
        }
    }
}
