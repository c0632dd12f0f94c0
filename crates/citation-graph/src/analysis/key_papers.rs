//! Key paper selection with human-readable justifications.

use chrono::{Datelike, Utc};

use crate::models::{KeyPaper, PaperNode};

/// Number of key papers reported.
pub const KEY_PAPER_LIMIT: usize = 10;

/// Select the most influential papers using the current calendar year.
#[must_use]
pub fn select_key_papers(nodes: &[PaperNode]) -> Vec<KeyPaper> {
    select_key_papers_at(nodes, Utc::now().year())
}

/// Select the most influential papers relative to `current_year`.
///
/// Ties on influence keep node order.
#[must_use]
pub fn select_key_papers_at(nodes: &[PaperNode], current_year: i32) -> Vec<KeyPaper> {
    let mut ranked: Vec<&PaperNode> = nodes.iter().collect();
    ranked.sort_by(|a, b| b.influence_score.total_cmp(&a.influence_score));

    ranked
        .into_iter()
        .take(KEY_PAPER_LIMIT)
        .map(|node| KeyPaper {
            id: node.id.clone(),
            title: node.title.clone(),
            influence_score: node.influence_score,
            citation_count: node.citation_count,
            centrality: node.centrality,
            reason: reason(node, current_year),
        })
        .collect()
}

/// Concatenate every matching label, or fall back to a generic one.
fn reason(node: &PaperNode, current_year: i32) -> String {
    let mut labels = Vec::new();

    if node.influence_score > 0.01 {
        labels.push("very influential");
    }
    if node.citation_count > 100 {
        labels.push("highly cited");
    }
    if node.centrality > 0.5 {
        labels.push("central hub");
    }
    if node.year.is_some_and(|y| y >= current_year - 5) && node.citation_count > 50 {
        labels.push("recent impact");
    }

    if labels.is_empty() { "key research paper".to_string() } else { labels.join(", ") }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(id: &str, influence: f64, citations: u64, centrality: f64, year: Option<i32>) -> PaperNode {
        PaperNode {
            influence_score: influence,
            citation_count: citations,
            centrality,
            year,
            ..PaperNode::new(id, format!("Paper {id}"))
        }
    }

    #[test]
    fn test_all_labels_in_order() {
        let node = paper("a", 0.2, 500, 0.9, Some(2024));
        assert_eq!(reason(&node, 2026), "very influential, highly cited, central hub, recent impact");
    }

    #[test]
    fn test_fallback_label() {
        let node = paper("a", 0.001, 3, 0.1, Some(1999));
        assert_eq!(reason(&node, 2026), "key research paper");
    }

    #[test]
    fn test_recent_impact_boundaries() {
        assert_eq!(reason(&paper("a", 0.0, 51, 0.0, Some(2021)), 2026), "recent impact");
        assert_eq!(reason(&paper("a", 0.0, 51, 0.0, Some(2020)), 2026), "key research paper");
        assert_eq!(reason(&paper("a", 0.0, 50, 0.0, Some(2025)), 2026), "key research paper");
        assert_eq!(reason(&paper("a", 0.0, 80, 0.0, None), 2026), "key research paper");
    }

    #[test]
    fn test_selection_is_capped_and_sorted() {
        let nodes: Vec<PaperNode> =
            (0..15_i32).map(|i| paper(&format!("p{i}"), f64::from(i) / 100.0, 0, 0.0, None)).collect();
        let selected = select_key_papers_at(&nodes, 2026);

        assert_eq!(selected.len(), KEY_PAPER_LIMIT);
        assert_eq!(selected[0].id, "p14");
        assert_eq!(selected[9].id, "p5");
        assert!(selected.windows(2).all(|w| w[0].influence_score >= w[1].influence_score));
    }

    #[test]
    fn test_select_uses_current_year() {
        let selected = select_key_papers(&[paper("new", 0.0, 60, 0.0, Some(Utc::now().year()))]);
        assert_eq!(selected[0].reason, "recent impact");
    }
}
