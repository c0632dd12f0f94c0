//! Semantic Scholar Graph API provider.

use std::borrow::Cow;
use std::sync::Arc;

use governor::DefaultDirectRateLimiter;
use reqwest_middleware::ClientWithMiddleware;

use super::MetadataProvider;
use super::middleware;
use crate::config::{Config, fields};
use crate::error::{ProviderError, ProviderResult};
use crate::models::{CitationPage, CitingPaper, PaperRecord};

/// Metadata provider backed by the Semantic Scholar Graph API.
#[derive(Clone)]
pub struct SemanticScholarProvider {
    /// HTTP client with retry middleware.
    client: ClientWithMiddleware,

    /// Shared request rate limiter.
    limiter: Arc<DefaultDirectRateLimiter>,

    /// Graph API base URL.
    graph_api_url: String,

    /// Citations page size.
    citations_per_paper: u32,

    has_api_key: bool,
}

impl SemanticScholarProvider {
    /// Create a provider with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            client: middleware::http_client(config)?,
            limiter: Arc::new(middleware::rate_limiter(config)),
            graph_api_url: config.graph_api_url.trim_end_matches('/').to_string(),
            citations_per_paper: config.citations_per_paper,
            has_api_key: config.has_api_key(),
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.has_api_key
    }

    /// Make a rate-limited GET request and decode the body.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ProviderResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.limiter.until_ready().await;

        tracing::debug!(url, "Provider request");
        let response = self.client.get(url).query(params).send().await?;
        let response = handle_response(response).await?;

        // Decode from text so malformed payloads surface as parse errors
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ProviderError::from)
    }
}

#[async_trait::async_trait]
impl MetadataProvider for SemanticScholarProvider {
    async fn paper(&self, id: &str) -> ProviderResult<PaperRecord> {
        if id.trim().is_empty() {
            return Err(ProviderError::EmptyIdentifier);
        }
        let url = format!("{}/paper/{}", self.graph_api_url, api_identifier(id));
        let params = vec![("fields".to_string(), fields::PAPER.join(","))];

        self.get(&url, &params).await
    }

    async fn citing_papers(&self, id: &str) -> ProviderResult<Vec<CitingPaper>> {
        if id.trim().is_empty() {
            return Err(ProviderError::EmptyIdentifier);
        }
        let url = format!("{}/paper/{}/citations", self.graph_api_url, api_identifier(id));
        let params = vec![
            ("fields".to_string(), fields::CITING.join(",")),
            ("limit".to_string(), self.citations_per_paper.to_string()),
        ];

        let page: CitationPage = self.get(&url, &params).await?;
        Ok(page.into_citing_papers())
    }
}

impl std::fmt::Debug for SemanticScholarProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScholarProvider")
            .field("graph_api_url", &self.graph_api_url)
            .field("has_api_key", &self.has_api_key)
            .finish()
    }
}

/// Map a caller identifier to the form the Graph API expects.
///
/// Bare DOIs gain the `DOI:` prefix; everything else passes through.
#[must_use]
pub fn api_identifier(id: &str) -> Cow<'_, str> {
    let id = id.trim();
    if id.starts_with("10.") {
        Cow::Owned(format!("DOI:{id}"))
    } else {
        Cow::Borrowed(id)
    }
}

/// Handle API response status codes.
async fn handle_response(response: reqwest::Response) -> ProviderResult<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    match status.as_u16() {
        429 => {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(60);

            Err(ProviderError::rate_limited(retry_after))
        }
        404 => {
            let text = response.text().await.unwrap_or_default();
            Err(ProviderError::not_found(text))
        }
        400 => {
            let text = response.text().await.unwrap_or_default();
            Err(ProviderError::bad_request(text))
        }
        500..=599 => {
            let text = response.text().await.unwrap_or_default();
            Err(ProviderError::server(status.as_u16(), text))
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(ProviderError::UnexpectedStatus { status: status.as_u16(), message: text })
        }
    }
}
