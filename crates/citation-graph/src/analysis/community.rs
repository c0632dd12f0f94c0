//! Community detection via label propagation.
//!
//! Citation direction is ignored: two papers are neighbors if either cites
//! the other. Ties between equally frequent neighbor labels go to the label
//! encountered first, so results are deterministic for a given node and
//! edge order but carry no further meaning.

use std::collections::{BTreeMap, HashMap};

use super::undirected_adjacency;
use crate::models::{CitationEdge, Community, PaperNode};

/// Papers listed per community summary.
pub const TOP_PAPERS_PER_COMMUNITY: usize = 5;

/// Authors listed per community summary.
pub const TOP_AUTHORS_PER_COMMUNITY: usize = 5;

/// Label propagation configuration and entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommunityDetector {
    /// Upper bound on propagation sweeps.
    pub iterations: usize,
}

impl Default for CommunityDetector {
    fn default() -> Self {
        Self { iterations: 10 }
    }
}

impl CommunityDetector {
    /// Create a detector.
    #[must_use]
    pub const fn new(iterations: usize) -> Self {
        Self { iterations }
    }

    /// Community id per node id; ids are dense `0..k`.
    #[must_use]
    pub fn detect(&self, nodes: &[PaperNode], edges: &[CitationEdge]) -> HashMap<String, usize> {
        nodes.iter().map(|n| n.id.clone()).zip(self.labels(nodes, edges)).collect()
    }

    /// Community id per node, in node order.
    #[must_use]
    pub fn labels(&self, nodes: &[PaperNode], edges: &[CitationEdge]) -> Vec<usize> {
        let adjacency = undirected_adjacency(nodes, edges);
        let mut labels: Vec<usize> = (0..nodes.len()).collect();

        for _ in 0..self.iterations {
            let mut changed = false;

            for (i, neighbors) in adjacency.iter().enumerate() {
                if neighbors.is_empty() {
                    continue;
                }

                // (label, count) in first-seen order
                let mut counts: Vec<(usize, usize)> = Vec::new();
                for &j in neighbors {
                    match counts.iter_mut().find(|(label, _)| *label == labels[j]) {
                        Some((_, count)) => *count += 1,
                        None => counts.push((labels[j], 1)),
                    }
                }

                let mut best = counts[0];
                for &candidate in &counts[1..] {
                    if candidate.1 > best.1 {
                        best = candidate;
                    }
                }

                if labels[i] != best.0 {
                    labels[i] = best.0;
                    changed = true;
                }
            }

            if !changed {
                break;
            }
        }

        renumber(&mut labels);
        labels
    }
}

/// Relabel to `0..k` in order of first appearance.
fn renumber(labels: &mut [usize]) {
    let mut mapping: HashMap<usize, usize> = HashMap::new();
    for label in labels.iter_mut() {
        let next = mapping.len();
        *label = *mapping.entry(*label).or_insert(next);
    }
}

/// Aggregate annotated nodes into per-community summaries, ordered by id.
#[must_use]
pub fn summarize_communities(nodes: &[PaperNode]) -> Vec<Community> {
    let mut members: BTreeMap<usize, Vec<&PaperNode>> = BTreeMap::new();
    for node in nodes {
        members.entry(node.community_id).or_default().push(node);
    }

    members
        .into_iter()
        .map(|(id, mut papers)| {
            let size = papers.len();

            let mut author_counts: HashMap<&str, usize> = HashMap::new();
            for paper in &papers {
                for author in &paper.authors {
                    *author_counts.entry(author.as_str()).or_default() += 1;
                }
            }
            let mut authors: Vec<(&str, usize)> = author_counts.into_iter().collect();
            authors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

            papers.sort_by(|a, b| b.influence_score.total_cmp(&a.influence_score));

            Community {
                id,
                size,
                top_papers: papers
                    .iter()
                    .take(TOP_PAPERS_PER_COMMUNITY)
                    .map(|p| p.id.clone())
                    .collect(),
                top_authors: authors
                    .into_iter()
                    .take(TOP_AUTHORS_PER_COMMUNITY)
                    .map(|(name, _)| name.to_string())
                    .collect(),
            }
        })
        .collect()
}
