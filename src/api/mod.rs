//! API Module
//!
//! HTTP handlers and routing for the product service.
//!
//! # Endpoints
//! - `/health` - Liveness probe, any method
//! - `GET /products` - List products, newest first
//! - `POST /products` - Create a product
//! - `DELETE /products/*id` - Delete a product
//! - `GET /stats` - Listing cache statistics

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
