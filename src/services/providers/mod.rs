/// Metadata provider abstraction
///
/// The enrichment service consumes metadata through this trait so the
/// external movie database can be swapped for a stub in tests. Providers
/// are queried by free-text title; their response shape is their own, and
/// implementations defensively default every field.
use crate::{error::AppResult, models::MovieMetadata};

pub mod omdb;

pub use omdb::OmdbProvider;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Look up metadata for a title.
    ///
    /// Returns `Ok(None)` when the provider has no match for the title.
    /// Network and malformed-response failures surface as errors; the
    /// enrichment layer degrades both cases to the unavailable sentinel.
    async fn lookup(&self, title: &str) -> AppResult<Option<MovieMetadata>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
