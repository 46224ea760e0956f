//! Blocking client for the OpenWeatherMap current-conditions endpoint.

use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::error::WeatherError;
use crate::core::config::WeatherConfig;

/// Text returned to clients for any non-success provider status.
pub const WEATHER_UNAVAILABLE_MESSAGE: &str = "Something went wrong";

/// Subset of the provider payload we rely on.
#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: MainReadings,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    /// Temperature in degrees Celsius (metric units are requested).
    temp: f64,
}

/// Outcome of a lookup that reached the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentWeather {
    /// Current temperature in whole degrees Celsius, floored.
    Temperature(i64),

    /// The provider answered with a non-success status.
    Unavailable(u16),
}

impl CurrentWeather {
    /// Sentence presented to the model for this outcome.
    pub fn describe(&self, city_name: &str) -> String {
        match self {
            Self::Temperature(celsius) => format!("The weather in {city_name} is {celsius}."),
            Self::Unavailable(_) => WEATHER_UNAVAILABLE_MESSAGE.to_string(),
        }
    }
}

/// Weather provider client.
///
/// Every call performs one synchronous GET; callers on an async runtime
/// must run it on a blocking thread.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    config: WeatherConfig,
}

impl WeatherClient {
    /// Create a client from the weather configuration.
    pub fn new(config: WeatherConfig) -> Self {
        Self { config }
    }

    /// Full request URL for a city, query string encoded.
    pub fn request_url(&self, city_name: &str) -> Result<String, WeatherError> {
        let query = serde_urlencoded::to_string([
            ("units", "metric"),
            ("q", city_name),
            ("appid", self.config.api_key.as_deref().unwrap_or_default()),
        ])
        .map_err(|e| WeatherError::invalid_request(e.to_string()))?;

        Ok(format!("{}?{}", self.config.base_url, query))
    }

    /// Look up the current temperature for a city.
    #[instrument(skip(self))]
    pub fn current(&self, city_name: &str) -> Result<CurrentWeather, WeatherError> {
        let url = self.request_url(city_name)?;

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .build()?;

        let response = client.get(&url).send()?;
        let status = response.status();

        if status != reqwest::StatusCode::OK {
            warn!("Weather provider returned {} for {:?}", status, city_name);
            return Ok(CurrentWeather::Unavailable(status.as_u16()));
        }

        let body = response.bytes()?;
        debug!("Weather response received: {} bytes", body.len());

        let parsed: WeatherResponse = serde_json::from_slice(&body)
            .map_err(|e| WeatherError::invalid_response(format!("main.temp not readable: {e}")))?;

        Ok(CurrentWeather::Temperature(parsed.main.temp.floor() as i64))
    }
}
