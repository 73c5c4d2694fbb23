// ============================================================================
// Retail Core - Franchise Service
// File: crates/retail-core/src/services/franchise_service.rs
// ============================================================================
//! Franchise read/write service owning the cache-aside protocol.
//!
//! Reads check the cache first and warm it after a store round-trip; writes
//! go to the store first and then invalidate-then-repopulate the cache entry.
//! The cache is advisory throughout: any cache failure degrades to a store
//! access, never to a failed request.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};
use validator::Validate;

use retail_shared::constants::{FRANCHISE_CACHE_KEY_PREFIX, FRANCHISE_CACHE_TTL_SECS};

use crate::domain::{Franchise, FranchiseDraft, NewFranchise};
use crate::error::DomainError;
use crate::repositories::{Cache, FranchiseRepository};

const CACHE_TTL: Duration = Duration::from_secs(FRANCHISE_CACHE_TTL_SECS);

pub struct FranchiseService<R, C> {
    repo: Arc<R>,
    cache: Arc<C>,
}

impl<R: FranchiseRepository, C: Cache> FranchiseService<R, C> {
    pub fn new(repo: Arc<R>, cache: Arc<C>) -> Self {
        Self { repo, cache }
    }

    pub async fn create(&self, draft: FranchiseDraft) -> Result<Franchise, DomainError> {
        draft.validate()?;

        let now = Utc::now();
        let franchise = NewFranchise {
            name: draft.name,
            created_at: now,
            updated_at: now,
        };

        let saved = self.repo.save(&franchise).await?;
        info!("Created franchise with id: {}", saved.id);

        self.cache_put(&saved).await;
        Ok(saved)
    }

    pub async fn rename(&self, id: i64, draft: FranchiseDraft) -> Result<Franchise, DomainError> {
        draft.validate()?;

        let mut franchise = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { entity: "Franchise", id })?;

        franchise.name = draft.name;
        franchise.updated_at = Utc::now();

        let updated = self.repo.update(&franchise).await?;
        info!("Updated franchise {} name to: {}", id, updated.name);

        // Invalidate, then repopulate. If the set step never runs, the next
        // read misses and falls through to the store; a plain overwrite could
        // instead leave a stale value behind. Concurrent renames race
        // last-write-wins with no version check.
        if let Err(e) = self.cache.delete(&cache_key(id)).await {
            warn!("Failed to invalidate cache for franchise {}: {}", id, e);
        }
        self.cache_put(&updated).await;

        Ok(updated)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Franchise, DomainError> {
        let key = cache_key(id);

        match self.cache.get(&key).await {
            Ok(Some(payload)) => match serde_json::from_str::<Franchise>(&payload) {
                Ok(franchise) => {
                    debug!("Cache hit for franchise: {}", id);
                    return Ok(franchise);
                }
                // A corrupt or incompatible blob is a miss, never a failure.
                Err(e) => warn!("Discarding corrupt cache entry for key {}: {}", key, e),
            },
            Ok(None) => debug!("Cache miss for franchise: {}", id),
            Err(e) => warn!("Cache read failed for key {}, falling back to store: {}", key, e),
        }

        let franchise = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { entity: "Franchise", id })?;

        self.cache_put(&franchise).await;
        Ok(franchise)
    }

    /// Listings always read the store; unbounded cardinality makes them a
    /// poor fit for the cache.
    pub async fn list_all(&self) -> Result<Vec<Franchise>, DomainError> {
        let franchises = self.repo.find_all().await?;
        debug!("Retrieved all franchises");
        Ok(franchises)
    }

    /// Best-effort cache population; failures are logged and swallowed.
    async fn cache_put(&self, franchise: &Franchise) {
        let key = cache_key(franchise.id);
        let payload = match serde_json::to_string(franchise) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to serialize franchise {} for cache: {}", franchise.id, e);
                return;
            }
        };
        match self.cache.set(&key, &payload, CACHE_TTL).await {
            Ok(()) => debug!("Cached franchise {} with TTL {:?}", franchise.id, CACHE_TTL),
            Err(e) => warn!("Failed to cache franchise {}: {}", franchise.id, e),
        }
    }
}

fn cache_key(id: i64) -> String {
    format!("{}{}", FRANCHISE_CACHE_KEY_PREFIX, id)
}
