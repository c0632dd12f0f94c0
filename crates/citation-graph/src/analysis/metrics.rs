//! Graph-level statistics.

use std::collections::{BTreeMap, HashSet};

use super::{NodeIndex, total_degrees};
use crate::models::{CitationEdge, GraphMetrics, PaperNode};

/// Compute density and degree statistics.
///
/// Ratios that are undefined for tiny graphs are reported as 0. Density
/// counts distinct directed pairs, so it stays within [0, 1] even for edge
/// lists that repeat a citation.
#[must_use]
pub fn compute_metrics(nodes: &[PaperNode], edges: &[CitationEdge]) -> GraphMetrics {
    let node_count = nodes.len();
    let index = NodeIndex::new(nodes);

    let resolved: Vec<(usize, usize)> = index.resolved(edges).collect();
    let edge_count = resolved.len();
    let distinct_pairs: HashSet<(usize, usize)> =
        resolved.iter().copied().filter(|(s, t)| s != t).collect();

    let density = if node_count <= 1 {
        0.0
    } else {
        distinct_pairs.len() as f64 / (node_count * (node_count - 1)) as f64
    };

    let avg_degree =
        if node_count == 0 { 0.0 } else { (2 * edge_count) as f64 / node_count as f64 };

    let degrees = total_degrees(nodes, edges);
    let max_degree = degrees.iter().copied().max().unwrap_or(0);
    let mut degree_distribution = BTreeMap::new();
    for degree in degrees {
        *degree_distribution.entry(degree).or_insert(0) += 1;
    }

    let community_count = nodes.iter().map(|n| n.community_id).collect::<HashSet<_>>().len();

    GraphMetrics {
        node_count,
        edge_count,
        density,
        avg_degree,
        max_degree,
        community_count,
        degree_distribution,
    }
}
