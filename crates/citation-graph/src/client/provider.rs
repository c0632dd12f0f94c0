//! Provider seam for bibliographic lookups.

use crate::error::ProviderResult;
use crate::models::{CitingPaper, PaperRecord};

/// A source of paper metadata and inbound citations.
///
/// Implementations report failures as errors; `MetadataClient` decides how
/// to degrade them.
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Look up a paper's bibliographic record.
    async fn paper(&self, id: &str) -> ProviderResult<PaperRecord>;

    /// List the papers citing `id`.
    async fn citing_papers(&self, id: &str) -> ProviderResult<Vec<CitingPaper>>;
}
