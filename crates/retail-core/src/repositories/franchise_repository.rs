//! Franchise repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::{Franchise, NewFranchise};
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait FranchiseRepository: Send + Sync {
    async fn save(&self, franchise: &NewFranchise) -> Result<Franchise, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Franchise>, DomainError>;
    async fn find_all(&self) -> Result<Vec<Franchise>, DomainError>;
    async fn update(&self, franchise: &Franchise) -> Result<Franchise, DomainError>;
}
