//! Cache Entry Module
//!
//! A single value held by the in-process backend, with its expiry deadline.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with value and expiry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// Instant from which the entry reads as absent
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry that expires `ttl` from now.
    pub fn new(value: String, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches its deadline, so a
    /// zero TTL is never readable.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}
