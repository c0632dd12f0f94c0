//! Paper payloads as returned by the metadata provider.

use serde::{Deserialize, Serialize};

/// A paper's bibliographic record.
///
/// Every field is optional on the wire; missing values fall back when the
/// record is turned into a graph node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperRecord {
    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Authors in byline order.
    #[serde(default)]
    pub authors: Vec<AuthorRef>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Publication venue (journal or conference).
    #[serde(default)]
    pub venue: Option<String>,

    /// Citations reported by the provider (not graph-local in-degree).
    #[serde(default)]
    pub citation_count: Option<i64>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Landing page URL.
    #[serde(default)]
    pub url: Option<String>,
}

impl PaperRecord {
    /// Get the paper title, falling back to "Untitled" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().filter(|t| !t.trim().is_empty()).unwrap_or("Untitled")
    }

    /// Get citation count, clamped to zero.
    #[must_use]
    pub fn citations(&self) -> u64 {
        self.citation_count.unwrap_or(0).max(0) as u64
    }

    /// Get author names in byline order, skipping unnamed entries.
    #[must_use]
    pub fn author_names(&self) -> Vec<String> {
        self.authors.iter().filter_map(|a| a.name.clone()).collect()
    }
}

/// Author reference embedded in a paper record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    /// Provider author ID.
    #[serde(default)]
    pub author_id: Option<String>,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A paper that cites the queried paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitingPaper {
    /// Identifier of the citing work.
    pub citing_id: String,

    /// Publication year of the citing work.
    #[serde(default)]
    pub year: Option<i32>,
}

impl CitingPaper {
    /// Create a citing-paper entry.
    #[must_use]
    pub fn new(citing_id: impl Into<String>, year: Option<i32>) -> Self {
        Self { citing_id: citing_id.into(), year }
    }
}

/// One page of a citations lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CitationPage {
    /// Offset of this page.
    #[serde(default)]
    pub offset: i32,

    /// Next offset if more citations exist.
    #[serde(default)]
    pub next: Option<i32>,

    /// Citation entries.
    #[serde(default)]
    pub data: Vec<CitationEntry>,
}

/// Wrapper object around a citing paper in a citations page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationEntry {
    /// The citing paper; null for withdrawn or unresolved records.
    #[serde(default)]
    pub citing_paper: Option<CitingPaperRef>,
}

/// Minimal citing-paper reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitingPaperRef {
    /// Provider paper ID.
    #[serde(default)]
    pub paper_id: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,
}

impl CitationPage {
    /// Flatten the page into citing papers, dropping entries without an ID.
    #[must_use]
    pub fn into_citing_papers(self) -> Vec<CitingPaper> {
        self.data
            .into_iter()
            .filter_map(|entry| entry.citing_paper)
            .filter_map(|paper| {
                let id = paper.paper_id.filter(|id| !id.is_empty())?;
                Some(CitingPaper::new(id, paper.year))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_partial_payload() {
        let record: PaperRecord = serde_json::from_value(serde_json::json!({
            "paperId": "abc",
            "title": null,
            "citationCount": -3
        }))
        .unwrap();

        assert_eq!(record.title_or_default(), "Untitled");
        assert_eq!(record.citations(), 0);
        assert!(record.author_names().is_empty());
    }

    #[test]
    fn test_author_names_skip_missing() {
        let record: PaperRecord = serde_json::from_value(serde_json::json!({
            "authors": [{"authorId": "1", "name": "Ada"}, {"authorId": "2"}, {"name": "Grace"}]
        }))
        .unwrap();

        assert_eq!(record.author_names(), vec!["Ada".to_string(), "Grace".to_string()]);
    }

    #[test]
    fn test_citation_page_drops_unresolved_entries() {
        let page: CitationPage = serde_json::from_value(serde_json::json!({
            "offset": 0,
            "data": [
                {"citingPaper": {"paperId": "p1", "year": 2020}},
                {"citingPaper": {"paperId": null, "year": 2021}},
                {"citingPaper": null},
                {"citingPaper": {"paperId": "p2"}}
            ]
        }))
        .unwrap();

        assert_eq!(
            page.into_citing_papers(),
            vec![CitingPaper::new("p1", Some(2020)), CitingPaper::new("p2", None)]
        );
    }
}
