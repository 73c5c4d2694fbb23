//! PostgreSQL repository implementations

pub mod branch_repo_impl;
pub mod franchise_repo_impl;
pub mod product_repo_impl;

pub use branch_repo_impl::PgBranchRepository;
pub use franchise_repo_impl::PgFranchiseRepository;
pub use product_repo_impl::PgProductRepository;
