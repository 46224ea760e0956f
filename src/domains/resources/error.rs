//! Resource-specific error types.

use thiserror::Error;

use crate::domains::notes::NoteStoreError;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The note log backing the resource could not be read.
    #[error(transparent)]
    Notes(#[from] NoteStoreError),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }
}
