//! Branch service
//!
//! CRUD over branches. The owning franchise id always comes from the command
//! context, never from the payload, and is checked for existence before any
//! insert.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use validator::Validate;

use crate::domain::{Branch, BranchDraft, NewBranch};
use crate::error::DomainError;
use crate::repositories::{BranchRepository, FranchiseRepository};

pub struct BranchService<B, F> {
    branches: Arc<B>,
    franchises: Arc<F>,
}

impl<B: BranchRepository, F: FranchiseRepository> BranchService<B, F> {
    pub fn new(branches: Arc<B>, franchises: Arc<F>) -> Self {
        Self { branches, franchises }
    }

    pub async fn add_to_franchise(
        &self,
        franchise_id: i64,
        draft: BranchDraft,
    ) -> Result<Branch, DomainError> {
        draft.validate()?;

        self.franchises
            .find_by_id(franchise_id)
            .await?
            .ok_or(DomainError::NotFound { entity: "Franchise", id: franchise_id })?;

        let now = Utc::now();
        let branch = NewBranch {
            name: draft.name,
            franchise_id,
            created_at: now,
            updated_at: now,
        };

        let saved = self.branches.save(&branch).await?;
        info!("Added branch {} to franchise {}", saved.id, franchise_id);
        Ok(saved)
    }

    pub async fn rename(&self, id: i64, draft: BranchDraft) -> Result<Branch, DomainError> {
        draft.validate()?;

        let mut branch = self
            .branches
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { entity: "Branch", id })?;

        branch.name = draft.name;
        branch.updated_at = Utc::now();

        let updated = self.branches.update(&branch).await?;
        info!("Updated branch {} name to: {}", id, updated.name);
        Ok(updated)
    }

    pub async fn list_by_franchise(&self, franchise_id: i64) -> Result<Vec<Branch>, DomainError> {
        let branches = self.branches.find_by_franchise_id(franchise_id).await?;
        debug!("Retrieved branches for franchise: {}", franchise_id);
        Ok(branches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Franchise;
    use crate::repositories::{MockBranchRepository, MockFranchiseRepository};
    use chrono::{TimeZone, Utc};

    fn franchise(id: i64) -> Franchise {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        Franchise {
            id,
            name: "Owner".to_string(),
            created_at: at,
            updated_at: at,
        }
    }

    fn branch(id: i64, franchise_id: i64, name: &str) -> Branch {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        Branch {
            id,
            name: name.to_string(),
            franchise_id,
            created_at: at,
            updated_at: at,
        }
    }

    fn draft(name: &str) -> BranchDraft {
        BranchDraft { name: name.to_string() }
    }

    fn service(
        branches: MockBranchRepository,
        franchises: MockFranchiseRepository,
    ) -> BranchService<MockBranchRepository, MockFranchiseRepository> {
        BranchService::new(Arc::new(branches), Arc::new(franchises))
    }

    #[tokio::test]
    async fn add_sets_parent_from_context_and_persists() {
        let mut branches = MockBranchRepository::new();
        let mut franchises = MockFranchiseRepository::new();

        franchises
            .expect_find_by_id()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|id| Ok(Some(franchise(id))));
        branches
            .expect_save()
            .withf(|b: &NewBranch| {
                b.franchise_id == 7 && b.name == "Downtown" && b.created_at == b.updated_at
            })
            .times(1)
            .returning(|b| {
                Ok(Branch {
                    id: 11,
                    name: b.name.clone(),
                    franchise_id: b.franchise_id,
                    created_at: b.created_at,
                    updated_at: b.updated_at,
                })
            });

        let saved = service(branches, franchises)
            .add_to_franchise(7, draft("Downtown"))
            .await
            .unwrap();
        assert_eq!(saved.franchise_id, 7);
    }

    #[tokio::test]
    async fn add_fails_when_franchise_missing() {
        let mut branches = MockBranchRepository::new();
        let mut franchises = MockFranchiseRepository::new();

        franchises.expect_find_by_id().returning(|_| Ok(None));
        branches.expect_save().times(0);

        let err = service(branches, franchises)
            .add_to_franchise(404, draft("Orphan"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Franchise", id: 404 }));
    }

    #[tokio::test]
    async fn add_validates_before_existence_check() {
        let mut branches = MockBranchRepository::new();
        let mut franchises = MockFranchiseRepository::new();

        franchises.expect_find_by_id().times(0);
        branches.expect_save().times(0);

        let err = service(branches, franchises)
            .add_to_franchise(1, draft("   "))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn add_rejects_name_above_max_length() {
        use retail_shared::constants::BRANCH_NAME_MAX_LEN;

        let mut branches = MockBranchRepository::new();
        let mut franchises = MockFranchiseRepository::new();

        franchises.expect_find_by_id().times(0);
        branches.expect_save().times(0);

        let err = service(branches, franchises)
            .add_to_franchise(1, draft(&"a".repeat(BRANCH_NAME_MAX_LEN + 1)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn rename_keeps_parent_and_created_at() {
        let mut branches = MockBranchRepository::new();
        let franchises = MockFranchiseRepository::new();

        let existing = branch(5, 7, "Old Name");
        let created_at = existing.created_at;
        branches
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        branches
            .expect_update()
            .withf(move |b: &Branch| {
                b.id == 5
                    && b.name == "New Name"
                    && b.franchise_id == 7
                    && b.created_at == created_at
            })
            .times(1)
            .returning(|b| Ok(b.clone()));

        let updated = service(branches, franchises).rename(5, draft("New Name")).await.unwrap();
        assert_eq!(updated.franchise_id, 7);
        assert_eq!(updated.name, "New Name");
    }

    #[tokio::test]
    async fn rename_missing_branch_is_not_found() {
        let mut branches = MockBranchRepository::new();
        let franchises = MockFranchiseRepository::new();

        branches.expect_find_by_id().returning(|_| Ok(None));
        branches.expect_update().times(0);

        let err = service(branches, franchises).rename(99, draft("Anything")).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Branch", id: 99 }));
    }

    #[tokio::test]
    async fn list_by_franchise_empty_is_ok() {
        let mut branches = MockBranchRepository::new();
        let franchises = MockFranchiseRepository::new();

        branches
            .expect_find_by_franchise_id()
            .returning(|_| Ok(Vec::new()));

        let all = service(branches, franchises).list_by_franchise(7).await.unwrap();
        assert!(all.is_empty());
    }
}
