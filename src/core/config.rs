//! Server configuration.
//!
//! Built from defaults, then overridden from the environment (and an
//! optional `.env` file) by [`Config::from_env`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// File name of the note log when no explicit path is configured.
pub const DEFAULT_NOTES_FILE: &str = "notes.txt";

/// Current-conditions endpoint of the OpenWeatherMap API.
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Default timeout for a single weather request.
pub const DEFAULT_WEATHER_TIMEOUT_SECS: u64 = 10;

/// Everything the server reads at startup, grouped by the part it configures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Note log configuration (shared by tools, resources and prompts).
    pub notes: NotesConfig,

    /// Weather provider configuration.
    pub weather: WeatherConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the note log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesConfig {
    /// Location of the newline-delimited note file.
    pub path: PathBuf,
}

/// Configuration for the weather provider.
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key. Not validated: a missing or wrong key
    /// only shows up as a failed lookup.
    pub api_key: Option<String>,

    /// Endpoint queried for current conditions.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Hides the API key.
impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl NotesConfig {
    /// Note log stored at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            path: default_notes_path(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_WEATHER_API_URL.to_string(),
            timeout_secs: DEFAULT_WEATHER_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "demo".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            notes: NotesConfig::default(),
            weather: WeatherConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
        }
    }
}

/// Note file placed beside the running executable.
///
/// Falls back to the working directory when the executable location
/// cannot be resolved.
fn default_notes_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_NOTES_FILE)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_NOTES_FILE))
}

/// Non-empty value of an environment variable.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

impl Config {
    /// Defaults overridden by the process environment.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// Recognised variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_LOG_TIMESTAMPS`, `MCP_NOTES_PATH`, `MCP_WEATHER_API_URL`,
    /// `MCP_WEATHER_TIMEOUT_SECS` and `WEATHER_API_KEY`. Empty values
    /// count as unset.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Some(name) = env_var("MCP_SERVER_NAME") {
            config.server.name = name;
        }
        if let Some(level) = env_var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(flag) = env_var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = !matches!(
                flag.trim().to_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }

        if let Some(path) = env_var("MCP_NOTES_PATH") {
            config.notes = NotesConfig::at(path);
        }

        config.weather.api_key = env_var("WEATHER_API_KEY");
        if let Some(base_url) = env_var("MCP_WEATHER_API_URL") {
            config.weather.base_url = base_url;
        }
        if let Some(timeout) = env_var("MCP_WEATHER_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.weather.timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring invalid MCP_WEATHER_TIMEOUT_SECS={:?}, using {}s",
                    timeout, config.weather.timeout_secs
                ),
            }
        }

        config
    }
}
