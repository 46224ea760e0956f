//! Weather lookup error types.

use thiserror::Error;

/// Errors that can occur while querying the weather provider.
///
/// A non-success HTTP status is not an error: it is reported as
/// [`CurrentWeather::Unavailable`](super::CurrentWeather::Unavailable).
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The request URL could not be built.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The request could not be sent or the body could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered 200 with a body we cannot interpret.
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

impl WeatherError {
    /// Create a new "invalid request" error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create a new "invalid response" error.
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }
}
