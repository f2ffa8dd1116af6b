use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use tokio::sync::Mutex;

use crate::models::MovieMetadata;
use crate::services::providers::MetadataProvider;

/// Default capacity of the metadata LRU cache
pub const DEFAULT_CACHE_CAPACITY: usize = 500;

/// Cached pass-through to the metadata provider.
///
/// Owns a bounded LRU cache keyed by exact title string. A provider miss or
/// failure is recorded as the unavailable sentinel, so a flaky title does
/// not get re-queried on every request and never aborts the rest of a
/// recommendation batch.
#[derive(Clone)]
pub struct MetadataService {
    provider: Arc<dyn MetadataProvider>,
    cache: Arc<Mutex<LruCache<String, MovieMetadata>>>,
}

impl MetadataService {
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self::with_capacity(provider, DEFAULT_CACHE_CAPACITY)
    }

    /// Creates the service with an explicit cache capacity. A zero capacity
    /// is clamped to one entry.
    pub fn with_capacity(provider: Arc<dyn MetadataProvider>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            provider,
            cache: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    /// Returns the metadata record for a title, consulting the cache first.
    ///
    /// Infallible by contract: any provider failure degrades to
    /// `MovieMetadata::unavailable`. Only a cache miss touches the network.
    pub async fn fetch(&self, title: &str) -> MovieMetadata {
        {
            let mut cache = self.cache.lock().await;
            if let Some(record) = cache.get(title) {
                tracing::debug!(title = %title, "Metadata cache hit");
                return record.clone();
            }
        }

        tracing::debug!(
            title = %title,
            provider = self.provider.name(),
            "Metadata cache miss"
        );

        let record = match self.provider.lookup(title).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                tracing::info!(title = %title, "No metadata found for title");
                MovieMetadata::unavailable(title)
            }
            Err(e) => {
                tracing::warn!(title = %title, error = %e, "Metadata lookup failed");
                MovieMetadata::unavailable(title)
            }
        };

        self.cache
            .lock()
            .await
            .put(title.to_string(), record.clone());

        record
    }

    /// Number of records currently cached
    pub async fn cached_len(&self) -> usize {
        self.cache.lock().await.len()
    }
}
