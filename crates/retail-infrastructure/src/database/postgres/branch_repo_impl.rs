//! PostgreSQL branch repository
//!
//! `franchise_id` is written once on insert and never appears in the update
//! statement.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use retail_core::domain::{Branch, NewBranch};
use retail_core::error::DomainError;
use retail_core::repositories::BranchRepository;

pub struct PgBranchRepository {
    pool: PgPool,
}

impl PgBranchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BranchRow {
    pub id: i64,
    pub name: String,
    pub franchise_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BranchRow> for Branch {
    fn from(row: BranchRow) -> Self {
        Branch {
            id: row.id,
            name: row.name,
            franchise_id: row.franchise_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl BranchRepository for PgBranchRepository {
    async fn save(&self, branch: &NewBranch) -> Result<Branch, DomainError> {
        let row: BranchRow = sqlx::query_as(
            r#"
            INSERT INTO branches (name, franchise_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, franchise_id, created_at, updated_at
            "#,
        )
        .bind(&branch.name)
        .bind(branch.franchise_id)
        .bind(branch.created_at)
        .bind(branch.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating branch: {}", e);
            DomainError::Database(e.to_string())
        })?;

        info!("Branch created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Branch>, DomainError> {
        let row: Option<BranchRow> = sqlx::query_as(
            r#"
            SELECT id, name, franchise_id, created_at, updated_at
            FROM branches
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding branch by id: {}", e);
            DomainError::Database(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_franchise_id(&self, franchise_id: i64) -> Result<Vec<Branch>, DomainError> {
        let rows: Vec<BranchRow> = sqlx::query_as(
            r#"
            SELECT id, name, franchise_id, created_at, updated_at
            FROM branches
            WHERE franchise_id = $1
            "#,
        )
        .bind(franchise_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing branches for franchise: {}", e);
            DomainError::Database(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn update(&self, branch: &Branch) -> Result<Branch, DomainError> {
        let row: BranchRow = sqlx::query_as(
            r#"
            UPDATE branches
            SET name = $2, updated_at = $3
            WHERE id = $1
            RETURNING id, name, franchise_id, created_at, updated_at
            "#,
        )
        .bind(branch.id)
        .bind(&branch.name)
        .bind(branch.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating branch: {}", e);
            DomainError::Database(e.to_string())
        })?;

        Ok(row.into())
    }
}
