//! Read notes tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::core::config::Config;
use crate::domains::notes::{NO_NOTES_MESSAGE, NoteStore};

/// The read notes tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ReadNotesParams {}

/// Read notes tool - returns the whole note log.
pub struct ReadNotesTool;

impl ReadNotesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "read_notes";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Read all notes from the sticky note file. Returns every saved note, one per line, oldest first; if no notes have been saved, returns a message saying there are no notes yet.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(config: &Config) -> CallToolResult {
        info!("Read notes tool called");

        match NoteStore::new(&config.notes).read_all() {
            Ok(content) if content.is_empty() => {
                CallToolResult::success(vec![Content::text(NO_NOTES_MESSAGE)])
            }
            Ok(content) => CallToolResult::success(vec![Content::text(content)]),
            Err(e) => {
                warn!("Failed to read notes: {}", e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ReadNotesParams>(),
            annotations: Some(
                ToolAnnotations::new()
                    .read_only(true)
                    .destructive(false)
                    .idempotent(true)
                    .open_world(false),
            ),
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create the route registered on the server's tool router.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let config = config.clone();
            async move { Ok::<_, McpError>(Self::execute(&config)) }.boxed()
        })
    }
}
