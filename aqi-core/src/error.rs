/// Error types for the AQI library
use thiserror::Error;

/// Main error type for AQI operations
#[derive(Error, Debug)]
pub enum AqiError {
    /// HTTP request failed (connection, timeout, body decode)
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// Failed to parse an upstream response
    #[error("Failed to parse response: {0}")]
    ResponseParse(String),

    /// Upstream returned a well-formed but empty payload
    #[error("Empty response from {0}")]
    EmptyResponse(&'static str),

    /// A location string could not be turned into coordinates
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// The OpenWeather API key is not configured
    #[error("OWM_API_KEY is not set")]
    MissingApiKey,

    /// Invalid configuration value
    #[error("Invalid configuration for {name}: {reason}")]
    Config { name: &'static str, reason: String },
}

impl From<serde_json::Error> for AqiError {
    fn from(e: serde_json::Error) -> Self {
        AqiError::ResponseParse(e.to_string())
    }
}

/// Type alias for Results using AqiError
pub type Result<T> = std::result::Result<T, AqiError>;
