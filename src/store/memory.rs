//! In-process product store.
//!
//! Used to run the service without Postgres in tests. Can be switched
//! unavailable to simulate an outage.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::ProductStore;
use crate::error::StoreError;
use crate::models::Product;

#[derive(Debug)]
pub struct MemoryProductStore {
    /// Newest first; ties on `created_at` keep the later insert in front
    rows: RwLock<Vec<Product>>,
    available: AtomicBool,
    calls: AtomicUsize,
}

impl Default for MemoryProductStore {
    fn default() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            available: AtomicBool::new(true),
            calls: AtomicUsize::new(0),
        }
    }
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with `StoreError::Unavailable`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of calls received, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    fn begin_call(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list_newest_first(&self) -> Result<Vec<Product>, StoreError> {
        self.begin_call()?;
        Ok(self.rows.read().await.clone())
    }

    async fn insert(&self, product: &Product) -> Result<u64, StoreError> {
        self.begin_call()?;
        let mut rows = self.rows.write().await;
        if rows.iter().any(|p| p.id == product.id) {
            return Err(StoreError::StatementFailed(format!(
                "duplicate key value violates unique constraint \"products_pkey\": {}",
                product.id
            )));
        }
        rows.insert(0, product.clone());
        // Stable: equal timestamps keep the newer insert first.
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(1)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64, StoreError> {
        self.begin_call()?;
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|p| p.id != id);
        Ok((before - rows.len()) as u64)
    }
}
