//! Domain entity and DTOs for the product service API
//!
//! `Product` is both the persisted entity and its JSON representation;
//! request and response bodies live alongside it.

pub mod product;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use product::Product;
pub use requests::{CreateProductRequest, NewProduct};
pub use responses::StatsResponse;
