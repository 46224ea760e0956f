//! Current weather tool definition.
//!
//! Queries the weather provider for the current temperature of a city.
//! The lookup is a blocking HTTP call, so the route runs it on tokio's
//! blocking pool instead of an executor thread.

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
use crate::domains::weather::WeatherClient;

/// Parameters for the weather tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetWeatherParams {
    /// Name of the city whose current weather should be fetched, e.g. "London".
    pub city_name: String,
}

/// Weather tool - current temperature for a city.
pub struct GetWeatherTool;

impl GetWeatherTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_weather";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the current weather for a given city. Takes `city_name`, the name of the city to look up, and returns a sentence with the current temperature in whole degrees Celsius (for example \"The weather in London is 15.\"). If the weather service cannot provide data for the city, returns \"Something went wrong\".";

    /// Execute the tool logic. Blocks on the provider request.
    #[instrument(skip_all, fields(city = %params.city_name))]
    pub fn execute(params: &GetWeatherParams, config: &Config) -> CallToolResult {
        info!("Weather tool called for city: {}", params.city_name);

        let client = WeatherClient::new(config.weather.clone());
        match client.current(&params.city_name) {
            Ok(weather) => {
                CallToolResult::success(vec![Content::text(weather.describe(&params.city_name))])
            }
            Err(e) => {
                warn!("Weather lookup failed: {}", e);
                CallToolResult::error(vec![Content::text(format!(
                    "Weather lookup failed: {}",
                    e
                ))])
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetWeatherParams>(),
            annotations: Some(
                ToolAnnotations::new()
                    .read_only(true)
                    .destructive(false)
                    .idempotent(false)
                    .open_world(true),
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
                let params: GetWeatherParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                let result = tokio::task::spawn_blocking(move || Self::execute(&params, &config))
                    .await
                    .map_err(|e| {
                        McpError::internal_error(format!("Task execution failed: {}", e), None)
                    })?;

                Ok(result)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::WeatherConfig;
    use crate::domains::weather::WEATHER_UNAVAILABLE_MESSAGE;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> Config {
        Config {
            weather: WeatherConfig {
                api_key: Some("test-key".to_string()),
                base_url: format!("{}/data/2.5/weather", server.uri()),
                timeout_secs: 5,
            },
            ..Config::default()
        }
    }

    async fn run(config: Config, city: &str) -> CallToolResult {
        let params = GetWeatherParams {
            city_name: city.to_string(),
        };
        tokio::task::spawn_blocking(move || GetWeatherTool::execute(&params, &config))
            .await
            .unwrap()
    }

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_weather_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "London"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "main": { "temp": 15.7 } })),
            )
            .mount(&server)
            .await;

        let result = run(config_for(&server), "London").await;
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "The weather in London is 15.");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_weather_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("anything at all"))
            .mount(&server)
            .await;

        let result = run(config_for(&server), "Nowhereville").await;
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), WEATHER_UNAVAILABLE_MESSAGE);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_weather_malformed_body_is_tool_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = run(config_for(&server), "London").await;
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_params_require_city_name() {
        let parsed = serde_json::from_value::<GetWeatherParams>(serde_json::json!({ "city": "Paris" }));
        assert!(parsed.is_err());
    }
}
