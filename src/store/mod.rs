//! Store Module
//!
//! Durable product state. Every call is a single attempt against the
//! backend; retry and fallback decisions belong to the caller.

mod memory;
mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::Product;

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

/// Relational product storage.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products, newest `created_at` first.
    async fn list_newest_first(&self) -> Result<Vec<Product>, StoreError>;

    /// Inserts a fully formed product. Returns rows affected.
    async fn insert(&self, product: &Product) -> Result<u64, StoreError>;

    /// Deletes by id. Returns rows affected; zero for an unknown id.
    async fn delete_by_id(&self, id: Uuid) -> Result<u64, StoreError>;
}
