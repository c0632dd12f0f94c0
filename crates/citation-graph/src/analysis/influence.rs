//! PageRank over the citation graph.
//!
//! Runs a fixed number of synchronous power iterations. Nodes without
//! outgoing edges do not redistribute their mass, so the score sum can
//! shrink below one when such nodes exist.

use std::collections::HashMap;

use super::NodeIndex;
use crate::models::{CitationEdge, PaperNode};

/// PageRank configuration and entry point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfluenceRanker {
    /// Probability of following a citation rather than teleporting.
    pub damping_factor: f64,

    /// Exact number of iterations; there is no convergence check.
    pub iterations: usize,
}

impl Default for InfluenceRanker {
    fn default() -> Self {
        Self { damping_factor: 0.85, iterations: 100 }
    }
}

impl InfluenceRanker {
    /// Create a ranker.
    #[must_use]
    pub const fn new(damping_factor: f64, iterations: usize) -> Self {
        Self { damping_factor, iterations }
    }

    /// Compute PageRank keyed by node id.
    #[must_use]
    pub fn rank(&self, nodes: &[PaperNode], edges: &[CitationEdge]) -> HashMap<String, f64> {
        nodes.iter().map(|n| n.id.clone()).zip(self.scores(nodes, edges)).collect()
    }

    /// Compute PageRank in node order.
    #[must_use]
    pub fn scores(&self, nodes: &[PaperNode], edges: &[CitationEdge]) -> Vec<f64> {
        let n = nodes.len();
        if n == 0 {
            return Vec::new();
        }

        let index = NodeIndex::new(nodes);
        let mut out_degree = vec![0usize; n];
        let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); n];
        for (source, target) in index.resolved(edges) {
            out_degree[source] += 1;
            incoming[target].push(source);
        }

        let d = self.damping_factor;
        let base = (1.0 - d) / n as f64;
        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0_f64; n];

        for _ in 0..self.iterations {
            for (v, sources) in incoming.iter().enumerate() {
                // Every listed source has at least this edge, so out_degree > 0
                let inflow: f64 = sources.iter().map(|&u| scores[u] / out_degree[u] as f64).sum();
                next[v] = base + d * inflow;
            }
            std::mem::swap(&mut scores, &mut next);
        }

        scores
    }
}
