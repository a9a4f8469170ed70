//! Response Cache Module
//!
//! Thread-safe handle over [`CacheStore`] that owns the background reaper.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::cache::CacheStore;
use crate::tasks::{spawn_reaper, ReaperHandle};

// == Response Cache ==
/// Time-expiring cache of raw response payloads keyed by URL.
///
/// Reads take a shared lock and never block each other; writes and reaper
/// sweeps take the exclusive lock.
#[derive(Debug)]
pub struct ResponseCache {
    /// Shared storage, also held by the reaper task
    store: Arc<RwLock<CacheStore>>,
    /// Running reaper, `None` once stopped
    reaper: Mutex<Option<ReaperHandle>>,
    /// Staleness threshold and reaper period
    interval: Duration,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(interval: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(interval)));
        let reaper = spawn_reaper(store.clone(), interval);

        Self {
            store,
            reaper: Mutex::new(Some(reaper)),
            interval,
        }
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`, if any.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let store = self.store.read().await;
        let value = store.get(key).map(<[u8]>::to_vec);
        debug!(key, hit = value.is_some(), "cache lookup");
        value
    }

    // == Put ==
    /// Stores `value` under `key`, replacing any previous payload.
    pub async fn put(&self, key: impl Into<String>, value: Vec<u8>) {
        let mut store = self.store.write().await;
        store.put(key, value);
    }

    // == Stop ==
    /// Stops the background reaper and waits for it to exit.
    ///
    /// Only the first call does anything; later calls return `false`.
    /// Entries already in the cache stay readable after stopping.
    pub async fn stop(&self) -> bool {
        let reaper = self.reaper.lock().await.take();
        match reaper {
            Some(reaper) => {
                reaper.stop().await;
                true
            }
            None => false,
        }
    }

    // == Interval ==
    /// Returns the eviction interval fixed at construction.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    // == Is Empty ==
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.com";

    #[tokio::test]
    async fn test_put_get() {
        let cases: [(&str, &[u8]); 2] = [
            ("https://example.com", &b"testdata"[..]),
            ("https://example.com/path", &b"moretestdata"[..]),
        ];

        for (key, value) in cases {
            let cache = ResponseCache::new(Duration::from_secs(5));
            cache.put(key, value.to_vec()).await;

            assert_eq!(cache.get(key).await.as_deref(), Some(value));
            assert_eq!(cache.len().await, 1);
        }
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let cache = ResponseCache::new(Duration::from_secs(5));

        assert!(cache.get(URL).await.is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_put_overwrite() {
        let cache = ResponseCache::new(Duration::from_secs(5));

        cache.put(URL, b"original".to_vec()).await;
        cache.put(URL, b"updated".to_vec()).await;

        assert_eq!(cache.get(URL).await, Some(b"updated".to_vec()));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_reap_loop() {
        let interval = Duration::from_millis(5);
        let cache = ResponseCache::new(interval);
        cache.put(URL, b"testdata".to_vec()).await;

        assert!(cache.get(URL).await.is_some());

        // Past the interval plus a couple of reaper periods
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(cache.get(URL).await.is_none());
    }

    #[tokio::test]
    async fn test_reap_loop_not_expired() {
        let interval = Duration::from_millis(500);
        let cache = ResponseCache::new(interval);
        cache.put(URL, b"testdata".to_vec()).await;

        tokio::time::sleep(interval / 2).await;

        assert!(cache.get(URL).await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reads_do_not_extend_lifetime() {
        let interval = Duration::from_secs(10);
        let cache = ResponseCache::new(interval);
        cache.put(URL, b"testdata".to_vec()).await;

        // Keep reading right up to the first sweep
        for _ in 0..9 {
            tokio::time::sleep(Duration::from_secs(1)).await;
            assert!(cache.get(URL).await.is_some());
        }

        // Sweep at 10s keeps the entry (age == interval); read again at 19.9s
        tokio::time::sleep(Duration::from_millis(10_900)).await;
        assert!(cache.get(URL).await.is_some());

        // The read at 19.9s must not have reset the age, so the 20s sweep drops it
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(cache.get(URL).await.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_puts_and_gets() {
        let cache = Arc::new(ResponseCache::new(Duration::from_secs(60)));

        let writers: Vec<_> = (0..64)
            .map(|i| {
                let cache = cache.clone();
                tokio::spawn(async move {
                    cache
                        .put(format!("https://example.com/{}", i), format!("value-{}", i).into_bytes())
                        .await;
                })
            })
            .collect();
        for writer in writers {
            writer.await.unwrap();
        }

        let readers: Vec<_> = (0..64)
            .map(|i| {
                let cache = cache.clone();
                tokio::spawn(async move {
                    let value = cache.get(&format!("https://example.com/{}", i)).await;
                    (i, value)
                })
            })
            .collect();
        for reader in readers {
            let (i, value) = reader.await.unwrap();
            assert_eq!(value, Some(format!("value-{}", i).into_bytes()));
        }

        assert_eq!(cache.len().await, 64);
    }

    #[tokio::test]
    async fn test_stop_is_idempotent() {
        let cache = ResponseCache::new(Duration::from_millis(5));

        assert!(cache.stop().await);
        assert!(!cache.stop().await);
    }

    #[tokio::test]
    async fn test_entries_survive_after_stop() {
        let cache = ResponseCache::new(Duration::from_millis(5));
        cache.put(URL, b"testdata".to_vec()).await;
        cache.stop().await;

        tokio::time::sleep(Duration::from_millis(50)).await;

        // Nothing sweeps any more
        assert!(cache.get(URL).await.is_some());
        assert_eq!(cache.interval(), Duration::from_millis(5));
    }
}
