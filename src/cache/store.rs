//! Cache Store Module
//!
//! Plain, single-owner map of response payloads. Synchronisation lives one
//! level up in [`ResponseCache`](crate::cache::ResponseCache).

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage for raw payloads keyed by resource URL.
#[derive(Debug)]
pub struct CacheStore {
    /// Payloads by URL
    entries: HashMap<String, CacheEntry>,
    /// Maximum age an entry may reach before a sweep removes it
    interval: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store with the given eviction interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            interval,
        }
    }

    // == Put ==
    /// Stores `value` under `key`, replacing any previous entry and
    /// resetting its creation time.
    pub fn put(&mut self, key: impl Into<String>, value: Vec<u8>) {
        self.entries.insert(key.into(), CacheEntry::new(value));
    }

    // == Get ==
    /// Returns the payload stored under `key`, if any.
    ///
    /// Reading never touches the entry, so its eviction deadline stays
    /// `created_at + interval` no matter how often it is read.
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(|entry| entry.value.as_slice())
    }

    // == Sweep ==
    /// Removes every entry older than the interval.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&mut self) -> usize {
        self.sweep_at(Instant::now())
    }

    /// Same as [`sweep`](Self::sweep) with an explicit clock reading.
    pub fn sweep_at(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let interval = self.interval;
        self.entries.retain(|_, entry| !entry.is_stale(now, interval));
        before - self.entries.len()
    }

    // == Interval ==
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://pokeapi.co/api/v2/location-area/";

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(Duration::from_secs(5));
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_store_put_and_get() {
        let mut store = CacheStore::new(Duration::from_secs(5));

        store.put(URL, b"testdata".to_vec());

        assert_eq!(store.get(URL), Some(&b"testdata"[..]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let store = CacheStore::new(Duration::from_secs(5));

        assert!(store.get(URL).is_none());
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new(Duration::from_secs(5));

        store.put(URL, b"original".to_vec());
        store.put(URL, b"updated".to_vec());

        assert_eq!(store.get(URL), Some(&b"updated"[..]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_empty_payload_is_a_hit() {
        let mut store = CacheStore::new(Duration::from_secs(5));

        store.put(URL, Vec::new());

        assert_eq!(store.get(URL), Some(&b""[..]));
    }

    #[test]
    fn test_sweep_keeps_fresh_entries() {
        let mut store = CacheStore::new(Duration::from_secs(5));
        store.put(URL, b"testdata".to_vec());

        let removed = store.sweep();

        assert_eq!(removed, 0);
        assert!(store.get(URL).is_some());
    }

    #[test]
    fn test_sweep_removes_only_stale_entries() {
        let interval = Duration::from_secs(5);
        let mut store = CacheStore::new(interval);

        store.put("https://example.com/old", b"old".to_vec());
        let t0 = store.entries["https://example.com/old"].created_at;
        store.entries.insert(
            "https://example.com/new".to_string(),
            CacheEntry {
                value: b"new".to_vec(),
                created_at: t0 + Duration::from_secs(3),
            },
        );

        // Six seconds after t0 only the first entry is past its interval
        let removed = store.sweep_at(t0 + Duration::from_secs(6));

        assert_eq!(removed, 1);
        assert!(store.get("https://example.com/old").is_none());
        assert!(store.get("https://example.com/new").is_some());
    }

    #[test]
    fn test_sweep_boundary_is_exclusive() {
        let interval = Duration::from_secs(5);
        let mut store = CacheStore::new(interval);
        store.put(URL, b"testdata".to_vec());
        let created_at = store.entries[URL].created_at;

        assert_eq!(store.sweep_at(created_at + interval), 0);
        assert!(store.get(URL).is_some());

        assert_eq!(store.sweep_at(created_at + interval + Duration::from_millis(1)), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_overwrite_resets_creation_time() {
        let interval = Duration::from_secs(5);
        let mut store = CacheStore::new(interval);
        store.put(URL, b"original".to_vec());
        let first = store.entries[URL].created_at;

        store.put(URL, b"updated".to_vec());
        let second = store.entries[URL].created_at;

        assert!(second >= first);
        assert_eq!(store.sweep_at(second + interval), 0);
    }
}
