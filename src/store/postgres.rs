//! Postgres-backed product store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use super::ProductStore;
use crate::error::StoreError;
use crate::models::Product;

const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id uuid PRIMARY KEY,
    name text NOT NULL,
    price_cents int NOT NULL,
    stock int NOT NULL,
    created_at timestamptz NOT NULL DEFAULT now()
)
"#;

const CREATE_CREATED_AT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS products_created_at_idx ON products (created_at DESC)";

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    price_cents: i32,
    stock: i32,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price_cents: row.price_cents,
            stock: row.stock,
            created_at: row.created_at,
        }
    }
}

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Creates the products table and its ordering index when missing.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_PRODUCTS_TABLE).execute(self.pool()).await?;
        sqlx::query(CREATE_CREATED_AT_INDEX)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list_newest_first(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price_cents, stock, created_at
            FROM products
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn insert(&self, product: &Product) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO products (id, name, price_cents, stock, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price_cents)
        .bind(product.stock)
        .bind(product.created_at)
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected())
    }
}
