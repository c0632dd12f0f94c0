//! Bounded-depth traversal from seed papers through their citing papers.

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use crate::analysis;
use crate::client::{MetadataClient, MetadataProvider, SemanticScholarProvider};
use crate::config::{Config, api};
use crate::models::{BuildInfo, BuildOptions, CitationEdge, Graph, PaperNode, Seed};
use crate::report::GraphReport;

/// Annotated graph plus traversal statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOutput {
    /// The finished, annotated graph.
    pub graph: Graph,

    /// Traversal statistics.
    pub build_info: BuildInfo,
}

/// Builds citation graphs from seed papers.
///
/// Each build gets its own `MetadataClient`, so nothing is cached across builds.
#[derive(Clone)]
pub struct GraphBuilder {
    provider: Arc<dyn MetadataProvider>,
    cache_max_size: u64,
}

impl GraphBuilder {
    /// Create a builder over any metadata provider.
    #[must_use]
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self { provider, cache_max_size: api::CACHE_MAX_SIZE }
    }

    /// Create a builder backed by the Semantic Scholar Graph API.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn semantic_scholar(config: &Config) -> anyhow::Result<Self> {
        let provider = SemanticScholarProvider::new(config)?;
        Ok(Self::new(Arc::new(provider)).with_cache_max_size(config.cache_max_size))
    }

    /// Bound the per-build caches.
    #[must_use]
    pub const fn with_cache_max_size(mut self, cache_max_size: u64) -> Self {
        self.cache_max_size = cache_max_size;
        self
    }

    /// Traverse from `seeds`, then annotate influence, communities, and centrality.
    ///
    /// Never fails: provider errors shrink the graph instead.
    pub async fn build(&self, seeds: &[Seed], options: &BuildOptions) -> BuildOutput {
        let started = Instant::now();
        tracing::info!(
            seeds = seeds.len(),
            max_depth = options.max_depth,
            algorithm = %options.algorithm,
            "Building citation graph"
        );

        let client = MetadataClient::new(Arc::clone(&self.provider), self.cache_max_size);
        let mut ctx = BuildContext::new(client);
        ctx.traverse(seeds, options, options.deadline().map(|d| started + d)).await;

        let BuildContext { client, mut nodes, edges, max_depth_reached, failed_fetches, truncated, .. } =
            ctx;
        analysis::annotate(&mut nodes, &edges, options.algorithm);

        let build_info = BuildInfo {
            build_time_ms: started.elapsed().as_millis() as u64,
            seed_count: seeds.len(),
            api_call_count: client.api_call_count(),
            max_depth_reached,
            failed_fetches,
            truncated,
        };

        tracing::info!(
            nodes = nodes.len(),
            edges = edges.len(),
            api_calls = build_info.api_call_count,
            failed = failed_fetches,
            truncated,
            elapsed_ms = build_info.build_time_ms,
            "Citation graph built"
        );

        BuildOutput { graph: Graph::new(nodes, edges), build_info }
    }

    /// Build and derive the full report bundle.
    pub async fn build_report(&self, seeds: &[Seed], options: &BuildOptions) -> GraphReport {
        GraphReport::new(self.build(seeds, options).await)
    }
}

impl std::fmt::Debug for GraphBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphBuilder").field("cache_max_size", &self.cache_max_size).finish()
    }
}

/// Mutable traversal state owned by one `build` call.
struct BuildContext {
    client: MetadataClient,
    visited: HashSet<String>,
    nodes: Vec<PaperNode>,
    edges: Vec<CitationEdge>,
    max_depth_reached: usize,
    failed_fetches: usize,
    truncated: bool,
}

impl BuildContext {
    fn new(client: MetadataClient) -> Self {
        Self {
            client,
            visited: HashSet::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            max_depth_reached: 0,
            failed_fetches: 0,
            truncated: false,
        }
    }

    /// Depth-first traversal over an explicit `(id, depth)` stack.
    async fn traverse(&mut self, seeds: &[Seed], options: &BuildOptions, deadline: Option<Instant>) {
        let mut stack: Vec<(String, usize)> = seeds.iter().rev().map(|s| (s.id.clone(), 0)).collect();

        while let Some((id, depth)) = stack.pop() {
            if deadline.is_some_and(|at| Instant::now() >= at) {
                self.stop_at_deadline(stack.len() + 1);
                return;
            }

            // Marked before fetching: a failed id is never retried in this build
            if !self.visited.insert(id.clone()) {
                continue;
            }

            let fetched = bounded(deadline, self.client.fetch_paper(&id)).await;
            let Some(fetched) = fetched else {
                self.stop_at_deadline(stack.len() + 1);
                return;
            };
            let Some(record) = fetched else {
                self.failed_fetches += 1;
                continue;
            };

            tracing::debug!(id = %id, depth, "Paper added");
            self.nodes.push(PaperNode::from_record(id.clone(), record));
            self.max_depth_reached = self.max_depth_reached.max(depth);

            if depth >= options.max_depth {
                continue;
            }

            let citing = bounded(deadline, self.client.fetch_citing_papers(&id)).await;
            let Some(citing) = citing else {
                self.stop_at_deadline(stack.len());
                return;
            };

            let mut seen: HashSet<&str> = HashSet::new();
            let mut children = Vec::new();
            for paper in &citing {
                if paper.citing_id == id || !seen.insert(paper.citing_id.as_str()) {
                    continue;
                }
                // Recorded before the citing paper is visited; it may never become a node
                self.edges.push(CitationEdge::new(paper.citing_id.clone(), id.clone(), paper.year));
                children.push((paper.citing_id.clone(), depth + 1));
            }

            // Reversed so the provider's first citing paper is explored first
            stack.extend(children.into_iter().rev());
        }
    }

    fn stop_at_deadline(&mut self, pending: usize) {
        self.truncated = true;
        tracing::warn!(pending, nodes = self.nodes.len(), "Build deadline reached, stopping traversal");
    }
}

/// Await `fut`, giving up at `deadline`. `None` means the deadline passed.
async fn bounded<T>(deadline: Option<Instant>, fut: impl Future<Output = T>) -> Option<T> {
    match deadline {
        Some(at) => tokio::time::timeout_at(at, fut).await.ok(),
        None => Some(fut.await),
    }
}
