//! API Handlers
//!
//! HTTP request handlers for each endpoint. Error bodies are plain text.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::cache::CacheGateway;
use crate::error::{AppError, Result};
use crate::models::{CreateProductRequest, Product, StatsResponse};
use crate::service::ProductService;
use crate::store::ProductStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
}

impl AppState {
    /// Creates a new AppState around a product service.
    pub fn new(products: ProductService) -> Self {
        Self { products }
    }

    /// Wires a service from its store and cache gateway.
    pub fn from_parts(store: Arc<dyn ProductStore>, cache: CacheGateway) -> Self {
        Self::new(ProductService::new(store, cache))
    }
}

/// Handler for /health
pub async fn health_handler() -> &'static str {
    "ok"
}

/// Handler for GET /products
pub async fn list_products_handler(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.products.list_products().await?;
    Ok(Json(products))
}

/// Handler for POST /products
///
/// The body is decoded here rather than through the `Json` extractor so
/// every decode failure, content type included, is a plain 400.
pub async fn create_product_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>)> {
    let request: CreateProductRequest = serde_json::from_slice(&body)
        .map_err(|_| AppError::Validation("bad json".to_string()))?;

    let product = state.products.create_product(request).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Handler for DELETE /products/*id
///
/// The wildcard captures nested segments too, so `a/b` reaches the id
/// check and is rejected as malformed.
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.products.delete_product(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for DELETE /products/ (empty id)
pub async fn delete_missing_id_handler(State(state): State<AppState>) -> Result<StatusCode> {
    state.products.delete_product("").await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(
        state.products.cache_enabled(),
        state.products.cache_stats(),
    ))
}

/// Fallback for unsupported methods on product routes.
pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
}
