//! Rate-limited HTTP client for the TVMaze API
//!
//! TVMaze allows roughly 20 calls per 10 seconds per IP. The client spaces
//! requests out instead of retrying: a 429 is reported to the caller as-is.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::error::{Result, TvmazeError};

/// Public TVMaze API endpoint
pub const TVMAZE_BASE_URL: &str = "http://api.tvmaze.com";

const DEFAULT_USER_AGENT: &str = concat!("tvmaze-rs/", env!("CARGO_PKG_VERSION"));

/// Rate limiter to control request frequency
///
/// Ensures that requests are spaced at least `min_interval` apart.
pub struct RateLimiter {
    /// Minimum interval between requests
    min_interval: Duration,
    /// Timestamp of the last request
    last_request: Arc<Mutex<Instant>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the specified requests per second
    ///
    /// # Example
    /// ```
    /// use tvmaze_core::client::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(2.0); // 2 requests per second
    /// ```
    pub fn new(requests_per_second: f64) -> Self {
        Self::with_interval(Duration::from_secs_f64(1.0 / requests_per_second))
    }

    /// Create a rate limiter from the minimum spacing between requests
    pub fn with_interval(min_interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            min_interval,
            last_request: Arc::new(Mutex::new(now.checked_sub(min_interval).unwrap_or(now))),
        }
    }

    /// Wait until the next request may be sent
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();

        if elapsed < self.min_interval {
            sleep(self.min_interval - elapsed).await;
        }

        *last = Instant::now();
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

/// Configuration for the TVMaze HTTP client
///
/// Every field has a default, so a partial `[client]` table in the config
/// file is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root, without trailing slash (default: `http://api.tvmaze.com`)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Maximum requests per second (default: 2.0)
    pub requests_per_second: f64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: TVMAZE_BASE_URL.to_string(),
            timeout_secs: 30,
            requests_per_second: 2.0,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// HTTP client for the TVMaze API
pub struct TvmazeClient {
    client: reqwest::Client,
    rate_limiter: RateLimiter,
    base_url: String,
}

impl TvmazeClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `TvmazeError::InvalidUrl` - base URL is not http(s)
    /// - `TvmazeError::InvalidConfig` - rate is not positive or its interval overflows `Duration`
    /// - `TvmazeError::HttpError` - the HTTP client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(TvmazeError::InvalidUrl(config.base_url));
        }
        let min_interval = Duration::try_from_secs_f64(1.0 / config.requests_per_second)
            .map_err(|_| {
                TvmazeError::InvalidConfig(format!(
                    "requests_per_second must be a positive rate, got {}",
                    config.requests_per_second
                ))
            })?;

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            rate_limiter: RateLimiter::with_interval(min_interval),
            base_url,
        })
    }

    /// API root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a response body from an API path
    ///
    /// # Arguments
    /// * `path` - Path relative to the API root (e.g., "/search/shows?q=girls")
    ///
    /// # Errors
    /// - `TvmazeError::NotFound` - Server returned 404
    /// - `TvmazeError::RateLimited` - Server returned 429
    /// - `TvmazeError::HttpError` - Network error or any other 4xx/5xx status
    /// - `TvmazeError::UnexpectedStatus` - Any other non-2xx status (1xx, unfollowed 3xx)
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);

        self.rate_limiter.acquire().await;
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "request failed");
            TvmazeError::HttpError(e)
        })?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.text().await?);
        }

        tracing::warn!(%url, %status, "unexpected status");

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(TvmazeError::NotFound(url));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TvmazeError::RateLimited);
        }

        if status.is_client_error() || status.is_server_error() {
            if let Err(e) = response.error_for_status() {
                return Err(TvmazeError::HttpError(e));
            }
        }

        Err(TvmazeError::UnexpectedStatus(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limiter_creation() {
        let limiter = RateLimiter::new(2.0);
        assert_eq!(limiter.min_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_rate_limiter_different_rates() {
        assert_eq!(RateLimiter::new(1.0).min_interval(), Duration::from_secs(1));
        assert_eq!(RateLimiter::new(4.0).min_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://api.tvmaze.com");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.requests_per_second, 2.0);
        assert!(config.user_agent.starts_with("tvmaze-rs/"));
    }

    #[test]
    fn test_client_config_partial_deserialize() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost:9000"}"#).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_client_creation() {
        let client = TvmazeClient::new().unwrap();
        assert_eq!(client.base_url(), TVMAZE_BASE_URL);
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let config = ClientConfig {
            base_url: "https://api.tvmaze.com/".to_string(),
            ..ClientConfig::default()
        };
        let client = TvmazeClient::with_config(config).unwrap();
        assert_eq!(client.base_url(), "https://api.tvmaze.com");
    }

    #[test]
    fn test_client_rejects_non_http_base_url() {
        let config = ClientConfig {
            base_url: "ftp://api.tvmaze.com".to_string(),
            ..ClientConfig::default()
        };
        match TvmazeClient::with_config(config) {
            Err(TvmazeError::InvalidUrl(url)) => assert_eq!(url, "ftp://api.tvmaze.com"),
            _ => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn test_client_rejects_zero_rate() {
        let config = ClientConfig {
            requests_per_second: 0.0,
            ..ClientConfig::default()
        };
        assert!(matches!(
            TvmazeClient::with_config(config),
            Err(TvmazeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_client_rejects_rate_with_overflowing_interval() {
        let config = ClientConfig {
            requests_per_second: 1e-30,
            ..ClientConfig::default()
        };
        match TvmazeClient::with_config(config) {
            Err(TvmazeError::InvalidConfig(msg)) => assert!(msg.contains("1e-30")),
            _ => panic!("Expected InvalidConfig error"),
        }
    }

    #[test]
    fn test_client_rejects_negative_and_nan_rate() {
        for rate in [-2.0, f64::NAN] {
            let config = ClientConfig {
                requests_per_second: rate,
                ..ClientConfig::default()
            };
            assert!(matches!(
                TvmazeClient::with_config(config),
                Err(TvmazeError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_rate_limiter_with_interval() {
        let limiter = RateLimiter::with_interval(Duration::from_millis(50));
        assert_eq!(limiter.min_interval(), Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_rate_limiter_acquire() {
        let limiter = RateLimiter::new(10.0);

        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;

        assert!(start.elapsed() >= Duration::from_millis(100));
    }
}
