//! Node centrality normalized into [0, 1].

use std::collections::{HashMap, VecDeque};

use super::{normalize_by_max, total_degrees, undirected_adjacency};
use crate::models::{CentralityAlgorithm, CitationEdge, PaperNode};

/// Centrality scorer for one methodology.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CentralityScorer {
    algorithm: CentralityAlgorithm,
}

impl CentralityScorer {
    /// Create a scorer.
    #[must_use]
    pub const fn new(algorithm: CentralityAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Methodology in use.
    #[must_use]
    pub const fn algorithm(&self) -> CentralityAlgorithm {
        self.algorithm
    }

    /// Centrality keyed by node id.
    #[must_use]
    pub fn score(&self, nodes: &[PaperNode], edges: &[CitationEdge]) -> HashMap<String, f64> {
        nodes.iter().map(|n| n.id.clone()).zip(self.scores(nodes, edges)).collect()
    }

    /// Centrality in node order.
    ///
    /// The PageRank methodology reads `influence_score` from the nodes, so
    /// it must run after influence has been written.
    #[must_use]
    pub fn scores(&self, nodes: &[PaperNode], edges: &[CitationEdge]) -> Vec<f64> {
        let raw: Vec<f64> = match self.algorithm {
            CentralityAlgorithm::Degree => {
                total_degrees(nodes, edges).into_iter().map(|d| d as f64).collect()
            }
            CentralityAlgorithm::Betweenness => betweenness(&undirected_adjacency(nodes, edges)),
            CentralityAlgorithm::PageRank => nodes.iter().map(|n| n.influence_score).collect(),
        };
        normalize_by_max(&raw)
    }
}

/// Brandes betweenness over an unweighted adjacency list, all sources.
fn betweenness(adjacency: &[Vec<usize>]) -> Vec<f64> {
    let n = adjacency.len();
    let mut bc = vec![0.0_f64; n];

    let mut stack: Vec<usize> = Vec::with_capacity(n);
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut sigma = vec![0.0_f64; n];
    let mut dist = vec![-1_i64; n];
    let mut delta = vec![0.0_f64; n];
    let mut queue = VecDeque::with_capacity(n);

    for s in 0..n {
        stack.clear();
        for p in &mut predecessors {
            p.clear();
        }
        sigma.fill(0.0);
        dist.fill(-1);
        delta.fill(0.0);

        sigma[s] = 1.0;
        dist[s] = 0;
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            stack.push(v);
            for &w in &adjacency[v] {
                if dist[w] < 0 {
                    dist[w] = dist[v] + 1;
                    queue.push_back(w);
                }
                if dist[w] == dist[v] + 1 {
                    sigma[w] += sigma[v];
                    predecessors[w].push(v);
                }
            }
        }

        while let Some(w) = stack.pop() {
            for &v in &predecessors[w] {
                delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
            }
            if w != s {
                bc[w] += delta[w];
            }
        }
    }

    bc
}
