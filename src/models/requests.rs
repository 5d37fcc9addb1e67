//! Request DTOs for the product service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for POST /products
///
/// Integers are taken wide so out-of-range values surface as validation
/// failures instead of decode failures.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(rename = "priceCents")]
    pub price_cents: i64,
    pub stock: i64,
}

/// Validated fields for a product about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price_cents: i32,
    pub stock: i32,
}

impl CreateProductRequest {
    /// Validates the request data
    ///
    /// Requires a non-empty name, a strictly positive price and a
    /// non-negative stock, each fitting the store's 32-bit columns.
    pub fn validate(self) -> Result<NewProduct, String> {
        if self.name.is_empty() {
            return Err("invalid fields: name must not be empty".to_string());
        }
        let price_cents = i32::try_from(self.price_cents)
            .ok()
            .filter(|p| *p > 0)
            .ok_or_else(|| "invalid fields: priceCents must be a positive integer".to_string())?;
        let stock = i32::try_from(self.stock)
            .ok()
            .filter(|s| *s >= 0)
            .ok_or_else(|| "invalid fields: stock must be a non-negative integer".to_string())?;

        Ok(NewProduct {
            name: self.name,
            price_cents,
            stock,
        })
    }
}
