//! Build options and seeds.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A seed publication to start traversal from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    /// External identifier (DOI or provider ID).
    pub id: String,
}

impl Seed {
    /// Create a seed.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl From<&str> for Seed {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Seed {
    fn from(id: String) -> Self {
        Self { id }
    }
}

/// Centrality methodology.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CentralityAlgorithm {
    /// Undirected degree normalized by the maximum degree.
    Degree,
    /// Brandes betweenness normalized by the maximum.
    Betweenness,
    /// PageRank normalized by the maximum influence score.
    #[default]
    PageRank,
}

impl CentralityAlgorithm {
    /// Option value for this methodology.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Degree => "degree",
            Self::Betweenness => "betweenness",
            Self::PageRank => "pagerank",
        }
    }
}

impl From<&str> for CentralityAlgorithm {
    /// Unknown values select PageRank.
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "degree" => Self::Degree,
            "betweenness" => Self::Betweenness,
            _ => Self::PageRank,
        }
    }
}

impl From<String> for CentralityAlgorithm {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<CentralityAlgorithm> for String {
    fn from(value: CentralityAlgorithm) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for CentralityAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn default_max_depth() -> usize {
    2
}

const fn default_min_citations() -> u64 {
    1
}

/// Options for one graph build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    /// Maximum traversal depth from any seed.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Minimum citation count. Advisory: recorded but not applied as a filter.
    #[serde(default = "default_min_citations")]
    pub min_citations: u64,

    /// Centrality methodology.
    #[serde(default)]
    pub algorithm: CentralityAlgorithm,

    /// Overall traversal deadline in milliseconds from build start.
    #[serde(default)]
    pub deadline_ms: Option<u64>,
}

impl BuildOptions {
    /// Set the traversal depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the centrality methodology.
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: CentralityAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set an overall traversal deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline_ms = Some(deadline.as_millis() as u64);
        self
    }

    /// Traversal deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            min_citations: default_min_citations(),
            algorithm: CentralityAlgorithm::default(),
            deadline_ms: None,
        }
    }
}
