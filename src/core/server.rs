//! MCP Server implementation and lifecycle management.
//!
//! `McpServer` answers MCP requests by delegating to the domain services:
//! tool calls go through the ToolRouter built in `domains/tools/router.rs`,
//! resource reads and prompt requests through their services. Domain
//! errors are lifted into [`Error`] before they reach the client.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Error;
use crate::domains::{prompts::PromptService, resources::ResourceService, tools::build_tool_router};

/// Instructions sent to clients during initialization.
pub const SERVER_INSTRUCTIONS: &str = "This server can add two integers (add), keep a sticky-note log (add_note, read_notes, the notes://latest resource and the note_summary_prompt prompt), and report the current temperature of a city (get_weather).";

/// The `demo` server: one instance per session, cheap to clone.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,
    resource_service: Arc<ResourceService>,
    prompt_service: Arc<PromptService>,

    /// Read by `#[tool_handler]` for `tools/list` and `tools/call`.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Build the services; all of them share the configured note log.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let resource_service = Arc::new(ResourceService::new(config.notes.clone()));
        let prompt_service = Arc::new(PromptService::new(config.notes.clone()));

        Self {
            tool_router: build_tool_router::<Self>(config.clone()),
            config,
            resource_service,
            prompt_service,
        }
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| Error::from(e).into())
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        self.prompt_service
            .get_prompt(&request.name, request.arguments)
            .await
            .map_err(|e| Error::from(e).into())
    }
}
