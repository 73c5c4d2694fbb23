//! Product repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::{NewProduct, Product};
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn save(&self, product: &NewProduct) -> Result<Product, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError>;
    async fn find_by_branch_id(&self, branch_id: i64) -> Result<Vec<Product>, DomainError>;
    async fn update(&self, product: &Product) -> Result<Product, DomainError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;

    /// Products holding the maximum stock within each of the given branches.
    /// Grouping is per branch; ties all come back.
    async fn find_max_stock_by_branches(
        &self,
        branch_ids: &[i64],
    ) -> Result<Vec<Product>, DomainError>;
}
