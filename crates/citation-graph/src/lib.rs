//! Citation Graph Engine
//!
//! Builds the citation neighborhood of a set of seed publications and derives
//! structural metrics used to surface key papers and research clusters.
//!
//! # Features
//!
//! - **Bounded traversal**: depth-limited, visit-once walk over citing papers
//! - **Degrade, don't abort**: provider failures shrink the graph, never fail the build
//! - **Influence**: fixed-iteration PageRank
//! - **Communities**: label propagation with dense ids
//! - **Centrality**: degree, betweenness, or normalized PageRank
//! - **Reports**: metrics, key papers with reasons, per-year timeline
//!
//! # Example
//!
//! ```no_run
//! use citation_graph::{BuildOptions, Config, GraphBuilder, Seed};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let builder = GraphBuilder::semantic_scholar(&config)?;
//!
//!     let seeds = [Seed::new("10.48550/arXiv.1706.03762")];
//!     let report = builder.build_report(&seeds, &BuildOptions::default()).await;
//!     println!("{}", report.to_json()?);
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod client;
pub mod config;
pub mod error;
pub mod graph;
pub mod models;
pub mod report;
pub mod telemetry;

pub use client::{MetadataClient, MetadataProvider, SemanticScholarProvider};
pub use config::Config;
pub use error::{ProviderError, ProviderResult};
pub use graph::{BuildOutput, GraphBuilder};
pub use models::{BuildOptions, CentralityAlgorithm, Graph, Seed};
pub use report::GraphReport;
