//! Cache module (Redis adapter)

pub mod redis_cache;

pub use redis_cache::{create_redis_pool, RedisCache};
