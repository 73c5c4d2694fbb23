//! # Retail Infrastructure
//!
//! Database and cache implementations (adapters).

pub mod cache;
pub mod database;

pub use cache::{create_redis_pool, RedisCache};
pub use database::{
    create_pool, init_schema, PgBranchRepository, PgFranchiseRepository, PgProductRepository,
};
