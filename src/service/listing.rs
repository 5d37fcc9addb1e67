//! Read path: cache-then-store product listing.

use tracing::warn;

use super::{ProductService, LISTING_CACHE_KEY, LISTING_TTL};
use crate::error::Result;
use crate::models::Product;

impl ProductService {
    /// Lists all products, newest first.
    ///
    /// A cache hit is returned as-is and may be up to [`LISTING_TTL`] stale.
    /// On a miss the store is read and the result cached; only a store
    /// failure fails the call.
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        if let Some(cached) = self.cache.get(LISTING_CACHE_KEY).await {
            match serde_json::from_str::<Vec<Product>>(&cached) {
                Ok(products) => return Ok(products),
                Err(err) => warn!(error = %err, "discarding undecodable cached listing"),
            }
        }

        let products = self.store.list_newest_first().await?;

        match serde_json::to_string(&products) {
            Ok(encoded) => {
                self.cache
                    .set(LISTING_CACHE_KEY, encoded, LISTING_TTL)
                    .await
            }
            Err(err) => warn!(error = %err, "listing not cached, encoding failed"),
        }

        Ok(products)
    }
}
