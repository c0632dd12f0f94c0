//! Outbound bundle handed to exporters.

use serde::{Deserialize, Serialize};

use crate::analysis;
use crate::graph::BuildOutput;
use crate::models::{BuildInfo, Community, Graph, GraphMetrics, KeyPaper, TimelineBucket};

/// A finished graph with every derived view.
///
/// Plain data: serializes field-for-field with camelCase names. Node
/// layout coordinates are left to the exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphReport {
    /// Annotated nodes and edges.
    pub graph: Graph,

    /// Graph-level statistics.
    pub metrics: GraphMetrics,

    /// Community summaries ordered by id.
    pub communities: Vec<Community>,

    /// Top papers by influence.
    pub key_papers: Vec<KeyPaper>,

    /// Per-year statistics, ascending.
    pub timeline: Vec<TimelineBucket>,

    /// Traversal statistics.
    pub build_info: BuildInfo,
}

impl GraphReport {
    /// Derive metrics, communities, key papers, and timeline from a build.
    #[must_use]
    pub fn new(output: BuildOutput) -> Self {
        let BuildOutput { graph, build_info } = output;
        let nodes = graph.nodes();

        Self {
            metrics: analysis::compute_metrics(nodes, graph.edges()),
            communities: analysis::summarize_communities(nodes),
            key_papers: analysis::select_key_papers(nodes),
            timeline: analysis::build_timeline(nodes),
            graph,
            build_info,
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
