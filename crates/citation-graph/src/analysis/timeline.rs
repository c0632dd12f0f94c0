//! Per-year aggregation of annotated nodes.

use std::collections::BTreeMap;

use crate::models::{PaperNode, TimelineBucket};

/// Bucket nodes by publication year, ascending. Undated nodes are skipped.
#[must_use]
pub fn build_timeline(nodes: &[PaperNode]) -> Vec<TimelineBucket> {
    let mut by_year: BTreeMap<i32, Vec<&PaperNode>> = BTreeMap::new();
    for node in nodes {
        if let Some(year) = node.year {
            by_year.entry(year).or_default().push(node);
        }
    }

    by_year
        .into_iter()
        .map(|(year, papers)| {
            let influence_sum: f64 = papers.iter().map(|p| p.influence_score).sum();
            let top_paper = papers
                .iter()
                .copied()
                .reduce(|best, p| if p.influence_score > best.influence_score { p } else { best })
                .map(|p| p.id.clone());

            TimelineBucket {
                year,
                paper_count: papers.len(),
                citation_sum: papers.iter().map(|p| p.citation_count).sum(),
                avg_influence: influence_sum / papers.len() as f64,
                top_paper,
            }
        })
        .collect()
}
