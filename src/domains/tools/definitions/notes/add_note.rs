//! Add note tool definition.
//!
//! Appends a message to the sticky-note log.

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
use crate::domains::notes::NoteStore;

/// Confirmation returned after a successful append.
pub const NOTE_SAVED_MESSAGE: &str = "Note saved!";

/// Parameters for the add note tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddNoteParams {
    /// The note content to be added. Line breaks are folded into spaces;
    /// it must contain something other than whitespace.
    pub message: String,
}

/// Add note tool - appends one entry to the note log.
pub struct AddNoteTool;

impl AddNoteTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add_note";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Append a new note to the sticky note file. Takes `message`, the note content to be added, and returns a confirmation message indicating the note was saved. Line breaks in the message are replaced with spaces; a blank message is rejected.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(params: &AddNoteParams, config: &Config) -> CallToolResult {
        info!("Add note tool called ({} chars)", params.message.chars().count());

        let store = NoteStore::new(&config.notes);
        match store.append(&params.message) {
            Ok(()) => CallToolResult::success(vec![Content::text(NOTE_SAVED_MESSAGE)]),
            Err(e) => {
                warn!("Failed to save note: {}", e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AddNoteParams>(),
            annotations: Some(
                ToolAnnotations::new()
                    .read_only(false)
                    .destructive(false)
                    .idempotent(false)
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
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: AddNoteParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config))
            }
            .boxed()
        })
    }
}
