//! Configuration for the metadata provider.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Requests per second without an API key.
    pub const REQUESTS_PER_SECOND: u32 = 5;

    /// Requests per second with an API key.
    pub const REQUESTS_PER_SECOND_WITH_KEY: u32 = 100;

    /// Retries for transient failures (5xx, connection resets).
    pub const MAX_RETRIES: u32 = 3;

    /// Citing papers requested per paper.
    pub const CITATIONS_PER_PAPER: u32 = 100;

    /// Maximum entries per build-scoped cache.
    pub const CACHE_MAX_SIZE: u64 = 10_000;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Field sets for provider requests.
pub mod fields {
    /// Fields needed to materialize a paper node.
    pub const PAPER: &[&str] =
        &["title", "authors", "year", "venue", "citationCount", "abstract", "url"];

    /// Fields requested for each citing paper.
    pub const CITING: &[&str] = &["paperId", "year"];
}

/// Provider configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Base URL for Graph API (for testing with mock servers).
    pub graph_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Sustained request rate.
    pub requests_per_second: u32,

    /// Retries for transient failures.
    pub max_retries: u32,

    /// Page size of the citations query.
    pub citations_per_paper: u32,

    /// Maximum entries per build-scoped cache.
    pub cache_max_size: u64,
}

impl Config {
    /// Create a new configuration with optional API key.
    ///
    /// The request rate follows API key presence: 5 req/s without, 100 req/s with.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        let requests_per_second = if api_key.is_some() {
            api::REQUESTS_PER_SECOND_WITH_KEY
        } else {
            api::REQUESTS_PER_SECOND
        };
        Self {
            api_key,
            graph_api_url: api::GRAPH_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            requests_per_second,
            max_retries: api::MAX_RETRIES,
            citations_per_paper: api::CITATIONS_PER_PAPER,
            cache_max_size: api::CACHE_MAX_SIZE,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            graph_api_url: format!("{}/graph/v1", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            requests_per_second: 10_000,
            max_retries: 0,
            citations_per_paper: api::CITATIONS_PER_PAPER,
            cache_max_size: 1000,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let api_key = std::env::var("SEMANTIC_SCHOLAR_API_KEY").ok().filter(|k| !k.is_empty());
        Ok(Self::new(api_key))
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.has_api_key());
        assert_eq!(config.requests_per_second, api::REQUESTS_PER_SECOND);
    }

    #[test]
    fn test_config_with_api_key_raises_rate() {
        let config = Config::new(Some("test-key".to_string()));
        assert!(config.has_api_key());
        assert_eq!(config.requests_per_second, api::REQUESTS_PER_SECOND_WITH_KEY);
    }

    #[test]
    fn test_config_for_testing() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.graph_api_url, "http://127.0.0.1:9999/graph/v1");
        assert_eq!(config.max_retries, 0);
    }

    #[test]
    fn test_fields() {
        assert!(fields::PAPER.contains(&"citationCount"));
        assert!(fields::CITING.contains(&"paperId"));
    }
}
