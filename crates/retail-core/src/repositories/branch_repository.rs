//! Branch repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::{Branch, NewBranch};
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait BranchRepository: Send + Sync {
    async fn save(&self, branch: &NewBranch) -> Result<Branch, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Branch>, DomainError>;
    async fn find_by_franchise_id(&self, franchise_id: i64) -> Result<Vec<Branch>, DomainError>;
    async fn update(&self, branch: &Branch) -> Result<Branch, DomainError>;
}
