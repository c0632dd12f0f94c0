//! Structural analysis over a built citation graph.
//!
//! - **Influence**: PageRank with a fixed iteration count
//! - **Community**: label propagation with dense relabelling
//! - **Centrality**: degree, betweenness (Brandes), or normalized PageRank
//! - **Metrics**: density and degree statistics
//! - **Key papers** and **timeline**: derived views for reporting
//!
//! Every pass resolves edges through the node set and ignores edges whose
//! endpoints were never materialized.

pub mod centrality;
pub mod community;
pub mod influence;
pub mod key_papers;
pub mod metrics;
pub mod timeline;

pub use centrality::CentralityScorer;
pub use community::{CommunityDetector, summarize_communities};
pub use influence::InfluenceRanker;
pub use key_papers::{KEY_PAPER_LIMIT, select_key_papers, select_key_papers_at};
pub use metrics::compute_metrics;
pub use timeline::build_timeline;

use std::collections::{HashMap, HashSet};

use crate::models::{CentralityAlgorithm, CitationEdge, PaperNode};

/// Write influence, community, and centrality onto every node.
///
/// Centrality runs last because the PageRank methodology reads the fresh
/// influence scores.
pub fn annotate(nodes: &mut [PaperNode], edges: &[CitationEdge], algorithm: CentralityAlgorithm) {
    let influence = InfluenceRanker::default().scores(nodes, edges);
    let communities = CommunityDetector::default().labels(nodes, edges);

    for ((node, score), community) in nodes.iter_mut().zip(influence).zip(communities) {
        node.influence_score = score;
        node.community_id = community;
    }

    let centrality = CentralityScorer::new(algorithm).scores(nodes, edges);
    for (node, value) in nodes.iter_mut().zip(centrality) {
        node.centrality = value;
    }
}

/// Position lookup from node id to index in the node slice.
pub(crate) struct NodeIndex<'a> {
    positions: HashMap<&'a str, usize>,
}

impl<'a> NodeIndex<'a> {
    pub(crate) fn new(nodes: &'a [PaperNode]) -> Self {
        let mut positions = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            positions.entry(node.id.as_str()).or_insert(i);
        }
        Self { positions }
    }

    pub(crate) fn get(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// `(source, target)` positions, or `None` for a dangling edge.
    pub(crate) fn resolve(&self, edge: &CitationEdge) -> Option<(usize, usize)> {
        Some((self.get(&edge.source)?, self.get(&edge.target)?))
    }

    pub(crate) fn resolved<'e>(
        &'e self,
        edges: &'e [CitationEdge],
    ) -> impl Iterator<Item = (usize, usize)> + 'e {
        edges.iter().filter_map(|edge| self.resolve(edge))
    }
}

/// Undirected neighbor lists; each neighbor listed once, self loops dropped.
///
/// Neighbors keep edge-list order.
pub(crate) fn undirected_adjacency(nodes: &[PaperNode], edges: &[CitationEdge]) -> Vec<Vec<usize>> {
    let index = NodeIndex::new(nodes);
    let mut adjacency = vec![Vec::new(); nodes.len()];
    let mut seen: HashSet<(usize, usize)> = HashSet::new();

    for (source, target) in index.resolved(edges) {
        if source == target {
            continue;
        }
        if seen.insert((source, target)) {
            adjacency[source].push(target);
        }
        if seen.insert((target, source)) {
            adjacency[target].push(source);
        }
    }

    adjacency
}

/// In-degree plus out-degree per node over resolved edges.
pub(crate) fn total_degrees(nodes: &[PaperNode], edges: &[CitationEdge]) -> Vec<usize> {
    let index = NodeIndex::new(nodes);
    let mut degrees = vec![0usize; nodes.len()];
    for (source, target) in index.resolved(edges) {
        degrees[source] += 1;
        degrees[target] += 1;
    }
    degrees
}

/// Scale values by their maximum into [0, 1]; all zeros when the maximum is not positive.
pub(crate) fn normalize_by_max(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if max > 0.0 {
        values.iter().map(|v| (v / max).clamp(0.0, 1.0)).collect()
    } else {
        vec![0.0; values.len()]
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{edges, nodes};
    use super::*;

    #[test]
    fn test_dangling_edges_are_not_resolved() {
        let nodes = nodes(&["a", "b"]);
        let edges = edges(&[("a", "b"), ("ghost", "a"), ("b", "ghost")]);
        let index = NodeIndex::new(&nodes);
        assert_eq!(index.resolved(&edges).collect::<Vec<_>>(), vec![(0, 1)]);
    }

    #[test]
    fn test_undirected_adjacency_dedupes_reciprocal_edges() {
        let nodes = nodes(&["a", "b", "c"]);
        let edges = edges(&[("a", "b"), ("b", "a"), ("c", "c"), ("c", "a")]);
        let adjacency = undirected_adjacency(&nodes, &edges);
        assert_eq!(adjacency[0], vec![1, 2]);
        assert_eq!(adjacency[1], vec![0]);
        assert_eq!(adjacency[2], vec![0]);
    }

    #[test]
    fn test_normalize_by_max() {
        assert_eq!(normalize_by_max(&[1.0, 2.0, 4.0]), vec![0.25, 0.5, 1.0]);
        assert_eq!(normalize_by_max(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(normalize_by_max(&[]).is_empty());
    }

    #[test]
    fn test_annotate_writes_all_fields() {
        let mut nodes = nodes(&["p0", "p1", "p2"]);
        let edges = edges(&[("p1", "p0"), ("p2", "p0")]);
        annotate(&mut nodes, &edges, CentralityAlgorithm::PageRank);

        assert!(nodes[0].influence_score > nodes[1].influence_score);
        assert_eq!(nodes[0].centrality, 1.0);
        assert!(nodes.iter().all(|n| n.community_id == nodes[0].community_id));
    }
}
