//! Repository and cache traits (ports)

pub mod branch_repository;
pub mod cache;
pub mod franchise_repository;
pub mod product_repository;

pub use branch_repository::BranchRepository;
pub use cache::Cache;
pub use franchise_repository::FranchiseRepository;
pub use product_repository::ProductRepository;

#[cfg(test)]
pub use branch_repository::MockBranchRepository;
#[cfg(test)]
pub use cache::MockCache;
#[cfg(test)]
pub use franchise_repository::MockFranchiseRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
