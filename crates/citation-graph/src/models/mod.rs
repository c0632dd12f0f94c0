//! Data models for provider payloads, the citation graph, and derived records.
//!
//! Provider payloads use `#[serde(default)]` for optional fields and
//! `#[serde(rename_all = "camelCase")]` to match API naming. Graph records
//! serialize with the same camelCase convention for exporters.

mod analysis;
mod graph;
mod options;
mod paper;

pub use analysis::{BuildInfo, Community, GraphMetrics, KeyPaper, TimelineBucket};
pub use graph::{CitationEdge, Graph, PaperNode};
pub use options::{BuildOptions, CentralityAlgorithm, Seed};
pub use paper::{AuthorRef, CitationEntry, CitationPage, CitingPaper, CitingPaperRef, PaperRecord};
