//! Addition tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument, warn};

/// Parameters for the add tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddParams {
    /// First integer operand.
    pub a: i64,

    /// Second integer operand.
    pub b: i64,
}

/// Add tool - returns the sum of two integers.
pub struct AddTool;

impl AddTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add two numbers. Takes two integers `a` and `b` and returns their sum as an integer.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(a = params.a, b = params.b))]
    pub fn execute(params: &AddParams) -> CallToolResult {
        info!("Add tool called");

        match params.a.checked_add(params.b) {
            Some(sum) => CallToolResult::success(vec![Content::text(sum.to_string())]),
            None => {
                warn!("Sum of {} and {} overflows a 64-bit integer", params.a, params.b);
                CallToolResult::error(vec![Content::text(format!(
                    "The sum of {} and {} does not fit in a 64-bit integer",
                    params.a, params.b
                ))])
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AddParams>(),
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
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: AddParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}
