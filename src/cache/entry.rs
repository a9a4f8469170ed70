//! Cache Entry Module
//!
//! Defines a single cached response payload and its age.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A raw response payload together with the moment it was stored.
///
/// Entries are never mutated in place; a repeated put replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload bytes
    pub value: Vec<u8>,
    /// When the entry was inserted
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how old the entry is at `now`.
    ///
    /// Saturates to zero if `now` is earlier than the creation time.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks whether the entry should be reaped at `now`.
    ///
    /// Boundary condition: an entry is stale only once its age is strictly
    /// greater than `interval`. An entry whose age equals `interval` exactly
    /// is kept until the next sweep.
    pub fn is_stale(&self, now: Instant, interval: Duration) -> bool {
        self.age_at(now) > interval
    }
}
