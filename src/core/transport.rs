//! Stdio transport.
//!
//! The server speaks MCP over its own stdin/stdout, one session per
//! process. Stdout belongs to the protocol, so nothing else may print there.

use rmcp::ServiceExt;
use tracing::info;

use super::error::{Error, Result};
use super::server::McpServer;

/// Serve one MCP session over stdin/stdout until the client goes away.
pub async fn serve_stdio(server: McpServer) -> Result<()> {
    info!("Ready - communicating via stdin/stdout");

    let session = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| Error::transport(format!("initialization failed: {}", e)))?;

    session
        .waiting()
        .await
        .map_err(|e| Error::transport(format!("session task failed: {}", e)))?;

    info!("Client disconnected");
    Ok(())
}
