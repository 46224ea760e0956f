//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool definition knows how to create its own route; this module
//! only decides which tools the server exposes, and in which order.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{AddNoteTool, AddTool, GetWeatherTool, ReadNotesTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(AddTool::create_route())
        .with_route(AddNoteTool::create_route(config.clone()))
        .with_route(ReadNotesTool::create_route(config.clone()))
        .with_route(GetWeatherTool::create_route(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestServer {}

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        let tools = router.list_all();
        assert_eq!(tools.len(), 4);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"add"));
        assert!(names.contains(&"add_note"));
        assert!(names.contains(&"read_notes"));
        assert!(names.contains(&"get_weather"));
    }

    #[test]
    fn test_every_tool_is_described() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        for tool in router.list_all() {
            let description = tool.description.as_deref().unwrap_or_default();
            assert!(!description.is_empty(), "{} has no description", tool.name);
        }
    }

    #[test]
    fn test_tools_listed_in_registration_order() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        let names: Vec<_> = router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(names, vec!["add", "add_note", "read_notes", "get_weather"]);
    }

    #[test]
    fn test_only_add_note_writes() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        for tool in router.list_all() {
            let read_only = tool
                .annotations
                .as_ref()
                .and_then(|a| a.read_only_hint)
                .unwrap_or(false);
            assert_eq!(read_only, tool.name != "add_note", "{}", tool.name);
        }
    }
}
