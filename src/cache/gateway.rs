//! Cache Gateway
//!
//! The only door to the cache. Whether a backend exists is decided once at
//! construction; after that a disabled cache and an erroring cache look the
//! same to callers: reads come back absent, writes are dropped.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use super::{CacheBackend, CacheCounters, CacheStats};

#[derive(Clone, Default)]
pub struct CacheGateway {
    backend: Option<Arc<dyn CacheBackend>>,
    counters: Arc<CacheCounters>,
}

impl CacheGateway {
    /// Gateway over a live backend.
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self {
            backend: Some(backend),
            counters: Arc::new(CacheCounters::new()),
        }
    }

    /// Gateway with no backend; every call is a no-op.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Looks up `key`. Never-set, expired, disabled and failed all read as `None`.
    pub async fn get(&self, key: &str) -> Option<String> {
        let backend = self.backend.as_ref()?;
        match backend.get(key).await {
            Ok(Some(value)) => {
                debug!(key, "cache hit");
                self.counters.record_hit();
                Some(value)
            }
            Ok(None) => {
                debug!(key, "cache miss");
                self.counters.record_miss();
                None
            }
            Err(err) => {
                warn!(key, error = %err, "cache read failed, treating as miss");
                self.counters.record_error();
                self.counters.record_miss();
                None
            }
        }
    }

    /// Stores `value` under `key` for `ttl`. Failures are logged and dropped.
    pub async fn set(&self, key: &str, value: String, ttl: Duration) {
        let Some(backend) = self.backend.as_ref() else {
            return;
        };
        if let Err(err) = backend.set(key, value, ttl).await {
            warn!(key, error = %err, "cache populate failed");
            self.counters.record_error();
        }
    }

    /// Removes `key`. Failures are logged and dropped; the entry then lives
    /// out its TTL.
    pub async fn invalidate(&self, key: &str) {
        let Some(backend) = self.backend.as_ref() else {
            return;
        };
        match backend.delete(key).await {
            Ok(()) => {
                debug!(key, "cache invalidated");
                self.counters.record_invalidation();
            }
            Err(err) => {
                warn!(key, error = %err, "cache invalidation failed, entry may be stale until expiry");
                self.counters.record_error();
            }
        }
    }

    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::error::CacheError;
    use async_trait::async_trait;

    const TTL: Duration = Duration::from_secs(30);

    struct BrokenCache;

    #[async_trait]
    impl CacheBackend for BrokenCache {
        async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
            Err(CacheError::Backend("connection refused".into()))
        }

        async fn set(&self, _key: &str, _value: String, _ttl: Duration) -> Result<(), CacheError> {
            Err(CacheError::Backend("connection refused".into()))
        }

        async fn delete(&self, _key: &str) -> Result<(), CacheError> {
            Err(CacheError::Backend("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn test_disabled_gateway_is_inert() {
        let gateway = CacheGateway::disabled();

        gateway.set("k", "v".into(), TTL).await;
        assert_eq!(gateway.get("k").await, None);
        gateway.invalidate("k").await;

        assert!(!gateway.is_enabled());
        assert_eq!(gateway.stats(), CacheStats::default());
    }

    #[tokio::test]
    async fn test_hit_miss_and_invalidate() {
        let gateway = CacheGateway::new(Arc::new(MemoryCache::new()));

        assert_eq!(gateway.get("k").await, None);
        gateway.set("k", "v".into(), TTL).await;
        assert_eq!(gateway.get("k").await.as_deref(), Some("v"));
        gateway.invalidate("k").await;
        assert_eq!(gateway.get("k").await, None);

        let stats = gateway.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.invalidations, 1);
        assert_eq!(stats.errors, 0);
    }

    #[tokio::test]
    async fn test_backend_errors_are_swallowed() {
        let gateway = CacheGateway::new(Arc::new(BrokenCache));

        assert_eq!(gateway.get("k").await, None);
        gateway.set("k", "v".into(), TTL).await;
        gateway.invalidate("k").await;

        let stats = gateway.stats();
        assert_eq!(stats.errors, 3);
        assert_eq!(stats.invalidations, 0);
    }

    #[tokio::test]
    async fn test_clones_share_counters() {
        let gateway = CacheGateway::new(Arc::new(MemoryCache::new()));
        let other = gateway.clone();

        other.get("k").await;

        assert_eq!(gateway.stats().misses, 1);
    }
}
