//! Demo MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing a handful of small
//! capabilities to LLM-driven clients:
//!
//! - **Tools**: `add`, `add_note`, `read_notes`, `get_weather`
//! - **Resources**: `notes://latest`
//! - **Prompts**: `note_summary_prompt`
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and the stdio transport
//! - **domains**: business logic organized by bounded contexts
//!   - **notes**: the append-only note log
//!   - **weather**: the weather provider client
//!   - **tools** / **resources** / **prompts**: MCP-facing definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use demo_mcp_server::core::{Config, McpServer, serve_stdio};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let server = McpServer::new(Config::from_env());
//!     serve_stdio(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
