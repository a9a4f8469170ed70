//! Cache-aware fetching
//!
//! Every resource lookup goes through [`get_or_fetch`]: serve from the cache
//! when possible, otherwise hit the network once and remember the raw bytes.

use async_trait::async_trait;
use tracing::debug;

use crate::cache::ResponseCache;
use crate::error::Result;

/// Something that can retrieve the raw body behind a URL.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url` and returns the response body.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Returns the payload for `key`, fetching and caching it on a miss.
///
/// Fetch errors are returned unchanged and nothing is cached for them, so the
/// next call for the same key goes back to the network.
pub async fn get_or_fetch<F>(cache: &ResponseCache, fetcher: &F, key: &str) -> Result<Vec<u8>>
where
    F: Fetcher + ?Sized,
{
    if let Some(data) = cache.get(key).await {
        return Ok(data);
    }

    debug!(key, "cache miss, fetching");
    let data = fetcher.fetch(key).await?;
    cache.put(key, data.clone()).await;

    Ok(data)
}
