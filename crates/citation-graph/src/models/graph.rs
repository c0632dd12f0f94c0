//! Citation graph data model.

use serde::{Deserialize, Serialize};

use super::PaperRecord;

/// One discovered publication.
///
/// `influence_score`, `community_id`, and `centrality` start at zero and are
/// written once by the analysis pass that runs at the end of a build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperNode {
    /// Stable external identifier, unique within a graph.
    pub id: String,

    /// Paper title ("Untitled" when the provider has none).
    pub title: String,

    /// Author names in byline order.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Publication venue.
    #[serde(default)]
    pub venue: Option<String>,

    /// Citations reported by the provider.
    #[serde(default)]
    pub citation_count: u64,

    /// PageRank score.
    #[serde(default)]
    pub influence_score: f64,

    /// Dense community label.
    #[serde(default)]
    pub community_id: usize,

    /// Normalized centrality in [0, 1].
    #[serde(default)]
    pub centrality: f64,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Landing page URL.
    #[serde(default)]
    pub url: Option<String>,
}

impl PaperNode {
    /// Create a node with only an id and title.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), ..Default::default() }
    }

    /// Materialize a node from a fetched record, with derived fields at zero.
    #[must_use]
    pub fn from_record(id: impl Into<String>, record: PaperRecord) -> Self {
        Self {
            id: id.into(),
            title: record.title_or_default().to_string(),
            authors: record.author_names(),
            year: record.year,
            venue: record.venue.clone().filter(|v| !v.trim().is_empty()),
            citation_count: record.citations(),
            r#abstract: record.r#abstract,
            url: record.url,
            ..Default::default()
        }
    }
}

/// Directed relation "source cites target".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationEdge {
    /// Citing paper id.
    pub source: String,

    /// Cited paper id.
    pub target: String,

    /// Edge weight; always 1.
    pub weight: u32,

    /// Year of the citing work.
    #[serde(default)]
    pub year: Option<i32>,
}

impl CitationEdge {
    /// Create a unit-weight edge.
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>, year: Option<i32>) -> Self {
        Self { source: source.into(), target: target.into(), weight: 1, year }
    }
}

/// A finished citation graph.
///
/// Read-only once built. Edges may name ids that never became nodes
/// (failed fetches); analysis passes ignore them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    nodes: Vec<PaperNode>,
    edges: Vec<CitationEdge>,
}

impl Graph {
    /// Assemble a graph from its parts.
    #[must_use]
    pub fn new(nodes: Vec<PaperNode>, edges: Vec<CitationEdge>) -> Self {
        Self { nodes, edges }
    }

    /// Nodes in discovery order.
    #[must_use]
    pub fn nodes(&self) -> &[PaperNode] {
        &self.nodes
    }

    /// Edges in discovery order.
    #[must_use]
    pub fn edges(&self) -> &[CitationEdge] {
        &self.edges
    }

    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&PaperNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, dangling ones included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when no paper was materialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
