//! Weather domain module.
//!
//! Wraps the third-party current-conditions API behind [`WeatherClient`].
//! The client is constructed from [`WeatherConfig`](crate::core::config::WeatherConfig),
//! which carries the API key loaded once at startup.

mod client;
mod error;

pub use client::{CurrentWeather, WeatherClient, WEATHER_UNAVAILABLE_MESSAGE};
pub use error::WeatherError;
