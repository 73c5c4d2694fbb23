//! Redis cache adapter
//!
//! Values are stored as raw strings under a per-entity key with a TTL
//! (`SET key value EX ttl`). Connections are established lazily, so an
//! unreachable Redis surfaces per operation and is absorbed by the service
//! layer rather than failing startup.

use std::time::Duration;

use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Config, Pool, PoolConfig, Runtime};
use tracing::debug;

use retail_core::error::CacheError;
use retail_core::repositories::Cache;

pub fn create_redis_pool(url: &str, max_connections: usize) -> Result<Pool, CacheError> {
    let mut config = Config::from_url(url);
    config.pool = Some(PoolConfig::new(max_connections));
    config
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| CacheError(e.to_string()))
}

pub struct RedisCache {
    pool: Pool,
}

impl RedisCache {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.pool.get().await.map_err(|e| CacheError(e.to_string()))?;
        let value: Option<String> = conn.get(key).await.map_err(|e| CacheError(e.to_string()))?;
        debug!(
            "Cache {} for key: {}",
            if value.is_some() { "hit" } else { "miss" },
            key
        );
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.pool.get().await.map_err(|e| CacheError(e.to_string()))?;
        let _: () = conn
            .set_ex(key, value, ttl.as_secs())
            .await
            .map_err(|e| CacheError(e.to_string()))?;
        debug!("Cached value for key: {} with TTL: {:?}", key, ttl);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.pool.get().await.map_err(|e| CacheError(e.to_string()))?;
        let _: () = conn.del(key).await.map_err(|e| CacheError(e.to_string()))?;
        debug!("Deleted cache entry for key: {}", key);
        Ok(())
    }
}
