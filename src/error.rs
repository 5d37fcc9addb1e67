//! Error types for the product service
//!
//! Store and cache failures are kept apart: store errors reach the caller as
//! an opaque 500, cache errors never leave the cache gateway.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

// == Store Error ==
/// Failure reported by the relational store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be reached (pool, I/O, TLS)
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store was reached but rejected or failed the statement
    #[error("Statement failed: {0}")]
    StatementFailed(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_) => StoreError::Unavailable(err.to_string()),
            other => StoreError::StatementFailed(other.to_string()),
        }
    }
}

// == Cache Error ==
/// Failure reported by a cache backend.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Backend call failed
    #[error("Cache backend error: {0}")]
    Backend(String),

    /// Cached value could not be encoded or decoded
    #[error("Cache serialization error: {0}")]
    Serialization(String),
}

impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self {
        CacheError::Backend(err.to_string())
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        CacheError::Serialization(err.to_string())
    }
}

// == App Error ==
/// Error surfaced by request handlers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Client-caused: malformed body, invalid fields or malformed id
    #[error("{0}")]
    Validation(String),

    /// Store failure after validation succeeded
    #[error(transparent)]
    Store(#[from] StoreError),
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::Store(err) => {
                tracing::error!(error = %err, "store request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for request-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_is_unavailable() {
        let err = StoreError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[test]
    fn test_row_not_found_is_statement_failure() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::StatementFailed(_)));
    }

    #[tokio::test]
    async fn test_store_error_body_is_opaque() {
        let response =
            AppError::from(StoreError::Unavailable("db at 10.0.0.3 refused".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"internal server error");
    }

    #[test]
    fn test_validation_is_bad_request() {
        let response = AppError::Validation("invalid fields".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
