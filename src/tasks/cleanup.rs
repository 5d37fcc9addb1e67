//! TTL Cleanup Task
//!
//! Expired entries already read as absent; this task only reclaims their
//! memory in the in-process backend. Redis expires keys itself.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryCache;

/// Spawns a background task that periodically cleans up expired cache entries.
///
/// Returns the task handle so shutdown can abort it.
pub fn spawn_cleanup_task(cache: Arc<MemoryCache>, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting cache cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired().await;
            if removed > 0 {
                info!("Cache cleanup: removed {} expired entries", removed);
            } else {
                debug!("Cache cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheBackend;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache = Arc::new(MemoryCache::new());
        cache
            .set("expire_soon", "[]".to_string(), Duration::from_millis(100))
            .await
            .unwrap();
        cache
            .set("long_lived", "[]".to_string(), Duration::from_secs(3600))
            .await
            .unwrap();

        let handle = spawn_cleanup_task(cache.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        // Counted without `get`, which would drop the entry on its own.
        assert_eq!(cache.len().await, 1);
        assert!(cache.get("long_lived").await.unwrap().is_some());

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let handle = spawn_cleanup_task(Arc::new(MemoryCache::new()), 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
