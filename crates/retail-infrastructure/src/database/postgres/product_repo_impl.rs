//! PostgreSQL product repository
//!
//! Carries the grouped max-stock query used by the report: group products by
//! branch, take each branch maximum, keep every product matching it so ties
//! survive.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use retail_core::domain::{NewProduct, Product};
use retail_core::error::DomainError;
use retail_core::repositories::ProductRepository;

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    pub id: i64,
    pub name: String,
    pub stock: i32,
    pub branch_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            stock: row.stock,
            branch_id: row.branch_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn save(&self, product: &NewProduct) -> Result<Product, DomainError> {
        let row: ProductRow = sqlx::query_as(
            r#"
            INSERT INTO products (name, stock, branch_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, stock, branch_id, created_at, updated_at
            "#,
        )
        .bind(&product.name)
        .bind(product.stock)
        .bind(product.branch_id)
        .bind(product.created_at)
        .bind(product.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating product: {}", e);
            DomainError::Database(e.to_string())
        })?;

        info!("Product created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, stock, branch_id, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding product by id: {}", e);
            DomainError::Database(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_branch_id(&self, branch_id: i64) -> Result<Vec<Product>, DomainError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, stock, branch_id, created_at, updated_at
            FROM products
            WHERE branch_id = $1
            "#,
        )
        .bind(branch_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing products for branch: {}", e);
            DomainError::Database(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn update(&self, product: &Product) -> Result<Product, DomainError> {
        let row: ProductRow = sqlx::query_as(
            r#"
            UPDATE products
            SET name = $2, stock = $3, updated_at = $4
            WHERE id = $1
            RETURNING id, name, stock, branch_id, created_at, updated_at
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.stock)
        .bind(product.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating product: {}", e);
            DomainError::Database(e.to_string())
        })?;

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting product: {}", e);
                DomainError::Database(e.to_string())
            })?;

        info!("Product deleted successfully: {}", id);
        Ok(())
    }

    async fn find_max_stock_by_branches(
        &self,
        branch_ids: &[i64],
    ) -> Result<Vec<Product>, DomainError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT p.id, p.name, p.stock, p.branch_id, p.created_at, p.updated_at
            FROM products p
            INNER JOIN (
                SELECT branch_id, MAX(stock) AS max_stock
                FROM products
                WHERE branch_id = ANY($1)
                GROUP BY branch_id
            ) max_products
            ON p.branch_id = max_products.branch_id
            AND p.stock = max_products.max_stock
            "#,
        )
        .bind(branch_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error running max-stock query: {}", e);
            DomainError::Database(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}
