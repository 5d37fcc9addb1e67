//! Product Service - CRUD over a single product entity
//!
//! Postgres holds the products; an optional cache (Redis or in-process)
//! holds the full listing for a bounded time and is dropped on every write.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use service::ProductService;
pub use tasks::spawn_cleanup_task;
