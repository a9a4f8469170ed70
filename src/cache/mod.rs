//! Cache Module
//!
//! Provides a time-expiring, in-memory cache of raw API responses with a
//! background reaper, plus the cache-aware fetch wrapper built on top of it.

mod entry;
mod fetch;
mod response_cache;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use fetch::{get_or_fetch, Fetcher};
pub use response_cache::ResponseCache;
pub use store::CacheStore;

// == Public Constants ==
/// Default eviction interval: five minutes
pub const DEFAULT_INTERVAL_SECS: u64 = 5 * 60;
