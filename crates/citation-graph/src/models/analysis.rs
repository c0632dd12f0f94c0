//! Derived records produced by a build and its analysis passes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Traversal statistics for one build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    /// Wall-clock build time.
    pub build_time_ms: u64,

    /// Seeds supplied by the caller.
    pub seed_count: usize,

    /// Provider round-trips attempted (cache misses).
    pub api_call_count: u64,

    /// Deepest level at which a node was materialized.
    pub max_depth_reached: usize,

    /// Paper lookups that produced no node.
    pub failed_fetches: usize,

    /// Traversal stopped early at the deadline.
    pub truncated: bool,
}

/// Graph-level statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMetrics {
    /// Number of nodes.
    pub node_count: usize,

    /// Edges whose endpoints are both nodes.
    pub edge_count: usize,

    /// Directed density in [0, 1].
    pub density: f64,

    /// Mean undirected degree.
    pub avg_degree: f64,

    /// Largest undirected degree.
    pub max_degree: usize,

    /// Distinct community labels.
    pub community_count: usize,

    /// Degree -> number of nodes with that degree.
    pub degree_distribution: BTreeMap<usize, usize>,
}

/// Aggregate view of one community.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    /// Community label.
    pub id: usize,

    /// Member count.
    pub size: usize,

    /// Member ids by influence, descending.
    pub top_papers: Vec<String>,

    /// Most frequent author names.
    pub top_authors: Vec<String>,
}

/// A highly ranked paper with a justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPaper {
    /// Paper id.
    pub id: String,

    /// Paper title.
    pub title: String,

    /// PageRank score.
    pub influence_score: f64,

    /// Citations reported by the provider.
    pub citation_count: u64,

    /// Normalized centrality.
    pub centrality: f64,

    /// Why the paper was selected.
    pub reason: String,
}

/// Per-year statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineBucket {
    /// Publication year.
    pub year: i32,

    /// Papers published that year.
    pub paper_count: usize,

    /// Sum of provider citation counts.
    pub citation_sum: u64,

    /// Mean influence score.
    pub avg_influence: f64,

    /// Most influential paper of the year.
    pub top_paper: Option<String>,
}
