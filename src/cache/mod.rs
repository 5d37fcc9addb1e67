//! Cache Module
//!
//! The cache gateway and the backends it can sit on. The cache only ever
//! holds disposable copies; every failure in here is absorbed by the gateway.

mod entry;
mod gateway;
mod memory;
mod redis_client;
mod stats;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::CacheError;

// Re-export public types
pub use entry::CacheEntry;
pub use gateway::CacheGateway;
pub use memory::MemoryCache;
pub use redis_client::RedisCache;
pub use stats::{CacheCounters, CacheStats};

// == Cache Backend ==
/// Key-value store with per-entry TTL.
///
/// `get` returns `None` for both never-set and expired keys. `delete` of an
/// absent key succeeds.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;

    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}
