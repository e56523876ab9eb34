//! Error types for the storage layer.

use thiserror::Error;

/// Storage-specific errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A write would duplicate an email the schema requires to be unique.
    #[error("email {email} is already registered")]
    DuplicateEmail { email: String },

    /// Database query error.
    #[error("database query error: {message}")]
    QueryError { message: String },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
