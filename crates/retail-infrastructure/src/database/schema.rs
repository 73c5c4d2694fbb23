//! Schema bootstrap
//!
//! Creates the franchise/branch/product tables on startup. The first probe
//! retries with backoff so the service can come up while the database is
//! still starting.

use std::time::Duration;

use sqlx::PgPool;
use tracing::{info, warn};

const MAX_ATTEMPTS: u32 = 5;
const INITIAL_BACKOFF: Duration = Duration::from_secs(2);
const MAX_BACKOFF: Duration = Duration::from_secs(10);

const CREATE_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS franchises (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS branches (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        franchise_id BIGINT NOT NULL REFERENCES franchises(id) ON DELETE CASCADE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(150) NOT NULL,
        stock INT NOT NULL DEFAULT 0 CHECK (stock >= 0),
        branch_id BIGINT NOT NULL REFERENCES branches(id) ON DELETE CASCADE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_branch_franchise ON branches (franchise_id)",
    "CREATE INDEX IF NOT EXISTS idx_product_branch ON products (branch_id)",
    "CREATE INDEX IF NOT EXISTS idx_product_branch_stock ON products (branch_id, stock)",
];

pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    wait_for_database(pool).await?;
    for statement in CREATE_STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Database schema created or verified");
    Ok(())
}

async fn wait_for_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut backoff = INITIAL_BACKOFF;
    for attempt in 1..=MAX_ATTEMPTS {
        match sqlx::query("SELECT 1").execute(pool).await {
            Ok(_) => return Ok(()),
            Err(e) if attempt < MAX_ATTEMPTS => {
                warn!("Database not ready yet, retrying (attempt {}): {}", attempt, e);
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(MAX_BACKOFF);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
