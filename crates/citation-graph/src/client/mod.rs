//! Paper-metadata access.
//!
//! - `MetadataProvider`: the async seam to an external bibliographic service
//! - `SemanticScholarProvider`: Graph API implementation (retries, rate limiting)
//! - `MetadataClient`: build-scoped memoizing wrapper that degrades failures
//!   to missing data instead of raising them

mod middleware;
mod provider;
mod semantic_scholar;

pub use provider::MetadataProvider;
pub use semantic_scholar::{SemanticScholarProvider, api_identifier};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use moka::future::Cache;

use crate::models::{CitingPaper, PaperRecord};

/// Memoizing metadata client scoped to one graph build.
///
/// Provider errors are logged and turned into `None` / an empty list so a
/// single bad paper never aborts a build.
pub struct MetadataClient {
    /// Upstream provider.
    provider: Arc<dyn MetadataProvider>,

    /// Paper records by id.
    papers: Cache<String, PaperRecord>,

    /// Citing papers by cited id.
    citations: Cache<String, Arc<Vec<CitingPaper>>>,

    /// Provider round-trips attempted.
    api_calls: AtomicU64,
}

impl MetadataClient {
    /// Create a client with empty caches.
    #[must_use]
    pub fn new(provider: Arc<dyn MetadataProvider>, cache_max_size: u64) -> Self {
        Self {
            provider,
            papers: Cache::builder().max_capacity(cache_max_size).build(),
            citations: Cache::builder().max_capacity(cache_max_size).build(),
            api_calls: AtomicU64::new(0),
        }
    }

    /// Fetch a paper record, or `None` if the provider failed.
    pub async fn fetch_paper(&self, id: &str) -> Option<PaperRecord> {
        if id.trim().is_empty() {
            tracing::warn!("Skipping paper lookup with empty identifier");
            return None;
        }

        if let Some(cached) = self.papers.get(id).await {
            tracing::debug!(id, "Paper cache hit");
            return Some(cached);
        }

        self.api_calls.fetch_add(1, Ordering::Relaxed);
        match self.provider.paper(id).await {
            Ok(record) => {
                self.papers.insert(id.to_string(), record.clone()).await;
                Some(record)
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "Paper lookup failed");
                None
            }
        }
    }

    /// Fetch the papers citing `id`, or an empty list if the provider failed.
    pub async fn fetch_citing_papers(&self, id: &str) -> Vec<CitingPaper> {
        if id.trim().is_empty() {
            tracing::warn!("Skipping citations lookup with empty identifier");
            return Vec::new();
        }

        if let Some(cached) = self.citations.get(id).await {
            tracing::debug!(id, "Citations cache hit");
            return cached.as_ref().clone();
        }

        self.api_calls.fetch_add(1, Ordering::Relaxed);
        match self.provider.citing_papers(id).await {
            Ok(citing) => {
                self.citations.insert(id.to_string(), Arc::new(citing.clone())).await;
                citing
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "Citations lookup failed");
                Vec::new()
            }
        }
    }

    /// Provider round-trips attempted so far, failures included.
    #[must_use]
    pub fn api_call_count(&self) -> u64 {
        self.api_calls.load(Ordering::Relaxed)
    }

    /// Drop all memoized responses.
    pub fn clear(&self) {
        self.papers.invalidate_all();
        self.citations.invalidate_all();
    }
}

impl std::fmt::Debug for MetadataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataClient").field("api_call_count", &self.api_call_count()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::error::{ProviderError, ProviderResult};

    #[derive(Default)]
    struct CountingProvider {
        papers: HashMap<String, PaperRecord>,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl MetadataProvider for CountingProvider {
        async fn paper(&self, id: &str) -> ProviderResult<PaperRecord> {
            self.calls.lock().unwrap().push(format!("paper:{id}"));
            self.papers.get(id).cloned().ok_or_else(|| ProviderError::not_found(id))
        }

        async fn citing_papers(&self, id: &str) -> ProviderResult<Vec<CitingPaper>> {
            self.calls.lock().unwrap().push(format!("citations:{id}"));
            if self.papers.contains_key(id) {
                Ok(vec![CitingPaper::new("c1", Some(2021))])
            } else {
                Err(ProviderError::server(503, "unavailable"))
            }
        }
    }

    fn provider_with(id: &str) -> Arc<CountingProvider> {
        let mut provider = CountingProvider::default();
        provider.papers.insert(
            id.to_string(),
            PaperRecord { title: Some("Known".to_string()), ..Default::default() },
        );
        Arc::new(provider)
    }

    #[test]
    fn test_repeated_fetch_is_served_from_cache() {
        let provider = provider_with("p1");
        let client = MetadataClient::new(provider.clone(), 100);

        tokio_test::block_on(async {
            assert!(client.fetch_paper("p1").await.is_some());
            assert!(client.fetch_paper("p1").await.is_some());
            assert_eq!(client.fetch_citing_papers("p1").await.len(), 1);
            assert_eq!(client.fetch_citing_papers("p1").await.len(), 1);
        });

        assert_eq!(client.api_call_count(), 2);
        assert_eq!(provider.calls.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_failures_degrade_and_are_counted() {
        let provider = provider_with("p1");
        let client = MetadataClient::new(provider, 100);

        tokio_test::block_on(async {
            assert!(client.fetch_paper("missing").await.is_none());
            assert!(client.fetch_citing_papers("missing").await.is_empty());
        });

        assert_eq!(client.api_call_count(), 2);
    }

    #[test]
    fn test_empty_identifier_skips_provider() {
        let provider = provider_with("p1");
        let client = MetadataClient::new(provider.clone(), 100);

        tokio_test::block_on(async {
            assert!(client.fetch_paper("  ").await.is_none());
            assert!(client.fetch_citing_papers("").await.is_empty());
        });

        assert_eq!(client.api_call_count(), 0);
        assert!(provider.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_clear_forces_refetch() {
        let provider = provider_with("p1");
        let client = MetadataClient::new(provider, 100);

        tokio_test::block_on(async {
            client.fetch_paper("p1").await;
            client.clear();
            client.fetch_paper("p1").await;
        });

        assert_eq!(client.api_call_count(), 2);
    }
}
