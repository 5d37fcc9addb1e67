//! Product Service
//!
//! Read and write paths over the store, with the listing cache layered on
//! top. The store is authoritative; the cache is advisory and every cache
//! failure degrades to the store path or to a skipped invalidation.

mod listing;
pub mod policy;
mod writes;


use std::sync::Arc;

use crate::cache::{CacheGateway, CacheStats};
use crate::store::ProductStore;

pub use policy::{LISTING_CACHE_KEY, LISTING_TTL};

/// Request-facing operations on products.
///
/// Cheap to clone; clones share the store pool and cache gateway.
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
    cache: CacheGateway,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>, cache: CacheGateway) -> Self {
        Self { store, cache }
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_enabled()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
