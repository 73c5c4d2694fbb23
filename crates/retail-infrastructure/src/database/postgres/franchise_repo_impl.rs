// ============================================================================
// Retail Infrastructure - PostgreSQL Franchise Repository
// File: crates/retail-infrastructure/src/database/postgres/franchise_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use retail_core::domain::{Franchise, NewFranchise};
use retail_core::error::DomainError;
use retail_core::repositories::FranchiseRepository;

pub struct PgFranchiseRepository {
    pool: PgPool,
}

impl PgFranchiseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct FranchiseRow {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FranchiseRow> for Franchise {
    fn from(row: FranchiseRow) -> Self {
        Franchise {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl FranchiseRepository for PgFranchiseRepository {
    async fn save(&self, franchise: &NewFranchise) -> Result<Franchise, DomainError> {
        let row: FranchiseRow = sqlx::query_as(
            r#"
            INSERT INTO franchises (name, created_at, updated_at)
            VALUES ($1, $2, $3)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(&franchise.name)
        .bind(franchise.created_at)
        .bind(franchise.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating franchise: {}", e);
            DomainError::Database(e.to_string())
        })?;

        info!("Franchise created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Franchise>, DomainError> {
        let row: Option<FranchiseRow> = sqlx::query_as(
            r#"
            SELECT id, name, created_at, updated_at
            FROM franchises
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding franchise by id: {}", e);
            DomainError::Database(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_all(&self) -> Result<Vec<Franchise>, DomainError> {
        let rows: Vec<FranchiseRow> = sqlx::query_as(
            r#"
            SELECT id, name, created_at, updated_at
            FROM franchises
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing franchises: {}", e);
            DomainError::Database(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn update(&self, franchise: &Franchise) -> Result<Franchise, DomainError> {
        let row: FranchiseRow = sqlx::query_as(
            r#"
            UPDATE franchises
            SET name = $2, updated_at = $3
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(franchise.id)
        .bind(&franchise.name)
        .bind(franchise.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating franchise: {}", e);
            DomainError::Database(e.to_string())
        })?;

        Ok(row.into())
    }
}
