//! Note store error types.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while accessing the note log.
#[derive(Debug, Error)]
pub enum NoteStoreError {
    /// The message has no visible content, so there is nothing to record.
    #[error("Note message is empty")]
    EmptyMessage,

    /// The note file could not be created, opened, read or written.
    #[error("Failed to access note file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NoteStoreError {
    /// Create an I/O error for the given note file.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
