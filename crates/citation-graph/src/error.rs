//! Error types for the citation-graph engine.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Provider errors never escape a build: `MetadataClient` downgrades them to
//! missing data and a warning.

use std::time::Duration;

/// Errors from a paper-metadata provider.
#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error (retry exhaustion, transport)
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Rate limited by the provider (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Paper not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from the provider
        message: String,
    },

    /// Malformed payload
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Lookup requested with an empty identifier
    #[error("Empty paper identifier")]
    EmptyIdentifier,
}

impl ProviderError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Returns true if a later attempt could succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Server { .. })
    }

    /// Get the retry-after duration if this is a rate limit error.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}

/// Result type alias for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_retryable() {
        assert!(ProviderError::rate_limited(60).is_retryable());
        assert!(ProviderError::server(503, "unavailable").is_retryable());

        assert!(!ProviderError::not_found("paper123").is_retryable());
        assert!(!ProviderError::bad_request("invalid id").is_retryable());
        assert!(!ProviderError::EmptyIdentifier.is_retryable());
    }

    #[test]
    fn test_provider_error_retry_after() {
        let err = ProviderError::rate_limited(30);
        assert_eq!(err.retry_after(), Some(Duration::from_secs(30)));
        assert_eq!(ProviderError::not_found("paper").retry_after(), None);
    }

    #[test]
    fn test_provider_error_messages() {
        assert_eq!(
            ProviderError::server(500, "boom").to_string(),
            "Server error (500): boom"
        );
        assert!(ProviderError::not_found("DOI:10.1/x").to_string().contains("DOI:10.1/x"));
    }
}
