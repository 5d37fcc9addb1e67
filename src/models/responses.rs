//! Response DTOs for the product service API
//!
//! Products serialize themselves; this covers the auxiliary endpoints.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// False when no cache backend is configured
    pub cache_enabled: bool,
    /// Listing reads served from the cache
    pub hits: u64,
    /// Listing reads that fell through to the store
    pub misses: u64,
    /// Swallowed cache backend failures
    pub errors: u64,
    /// Successful invalidations after writes
    pub invalidations: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from gateway statistics
    pub fn new(cache_enabled: bool, stats: CacheStats) -> Self {
        Self {
            cache_enabled,
            hits: stats.hits,
            misses: stats.misses,
            errors: stats.errors,
            invalidations: stats.invalidations,
            hit_rate: stats.hit_rate(),
        }
    }
}
