//! MCP Server Entry Point
//!
//! Loads configuration, initializes logging and serves MCP over stdio.
//! Stdout is reserved for the protocol; logs go to stderr.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use demo_mcp_server::core::config::LoggingConfig;
use demo_mcp_server::core::{Config, McpServer, serve_stdio};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("Notes stored in {}", config.notes.path.display());
    if config.weather.api_key.is_none() {
        warn!("WEATHER_API_KEY is not set; get_weather will report failures");
    }

    let server = McpServer::new(config);

    info!("Server initialized");

    serve_stdio(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level; `RUST_LOG` directives
/// are honoured on top of it.
fn init_logging(logging: &LoggingConfig) {
    let level = match logging.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if logging.with_timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
