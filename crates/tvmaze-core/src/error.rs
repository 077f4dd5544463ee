//! Error types for the TVMaze browser
//!
//! TvmazeError implements Serialize so it can be emitted alongside JSON output.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for TVMaze operations
#[derive(Error, Debug)]
pub enum TvmazeError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-2xx status that is not a 4xx/5xx error
    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),

    /// Response body did not have the expected JSON shape
    #[error("Failed to decode response: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// Configured base URL cannot be used
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Client configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Rate limited by the server (HTTP 429)
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// Requested resource was not found (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Search term was empty or whitespace-only
    #[error("Search term cannot be empty")]
    EmptyQuery,

    /// Invalid TVMaze show ID provided
    #[error("Invalid show ID: {0}")]
    InvalidId(u32),
}

impl Serialize for TvmazeError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for TVMaze operations
pub type Result<T> = std::result::Result<T, TvmazeError>;
