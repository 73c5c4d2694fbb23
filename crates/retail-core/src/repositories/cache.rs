//! Cache trait (port)

use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::CacheError;

/// Key/value cache with per-entry TTL. Values are raw serialized payloads;
/// (de)serialization stays with the caller so the trait remains object-safe.
///
/// The cache is advisory: callers must keep working when every one of these
/// operations fails.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Cache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}
