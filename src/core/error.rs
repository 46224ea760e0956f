//! Error types and handling for the MCP server.
//!
//! Domain services return their own error enums. The server handler lifts
//! them into [`Error`] and from there into the protocol-level `ErrorData`
//! sent back to the client.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::domains::prompts::PromptError;
use crate::domains::resources::ResourceError;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    /// Error originating from the prompts domain.
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// The MCP session could not be established or ended abnormally.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl Error {
    /// Create a new transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let message = err.to_string();
        match err {
            Error::Resource(ResourceError::NotFound(_)) => {
                McpError::resource_not_found(message, None)
            }
            Error::Prompt(PromptError::NotFound(_) | PromptError::MissingArgument(_)) => {
                McpError::invalid_params(message, None)
            }
            _ => McpError::internal_error(message, None),
        }
    }
}
