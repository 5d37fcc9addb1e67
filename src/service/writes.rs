//! Write path: durable mutation, then listing invalidation.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::{ProductService, LISTING_CACHE_KEY};
use crate::error::{AppError, Result};
use crate::models::{CreateProductRequest, Product};

impl ProductService {
    /// Validates and persists a new product, then drops the cached listing.
    ///
    /// Nothing is touched when validation fails. A failed insert leaves the
    /// cache alone; a failed invalidation does not fail the create.
    pub async fn create_product(&self, request: CreateProductRequest) -> Result<Product> {
        let fields = request.validate().map_err(AppError::Validation)?;

        let product = Product {
            id: Uuid::new_v4(),
            name: fields.name,
            price_cents: fields.price_cents,
            stock: fields.stock,
            created_at: Utc::now(),
        };

        self.store.insert(&product).await?;
        self.cache.invalidate(LISTING_CACHE_KEY).await;

        info!(id = %product.id, "product created");
        Ok(product)
    }

    /// Deletes a product by id, then drops the cached listing.
    ///
    /// Deleting an unknown id succeeds. Empty and malformed ids are rejected
    /// before the store is contacted.
    pub async fn delete_product(&self, raw_id: &str) -> Result<()> {
        if raw_id.is_empty() {
            return Err(AppError::Validation("missing id".to_string()));
        }
        let id = Uuid::parse_str(raw_id)
            .map_err(|_| AppError::Validation("invalid id (must be UUID)".to_string()))?;

        let removed = self.store.delete_by_id(id).await?;
        self.cache.invalidate(LISTING_CACHE_KEY).await;

        info!(%id, removed, "product deleted");
        Ok(())
    }
}
