//! Prompt-specific error types.

use thiserror::Error;

use crate::domains::notes::NoteStoreError;

/// Why a prompt could not be listed or rendered.
#[derive(Debug, Error)]
pub enum PromptError {
    /// No prompt is registered under this name.
    #[error("Prompt not found: {0}")]
    NotFound(String),

    /// A required argument was absent or not a string.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// A prompt template is malformed.
    #[error("Template error: {0}")]
    TemplateError(String),

    /// The note log could not be read while rendering.
    #[error(transparent)]
    Notes(#[from] NoteStoreError),
}

impl PromptError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "missing argument" error.
    pub fn missing_argument(arg: impl Into<String>) -> Self {
        Self::MissingArgument(arg.into())
    }

    /// Create a new "template" error.
    pub fn template(msg: impl Into<String>) -> Self {
        Self::TemplateError(msg.into())
    }
}
