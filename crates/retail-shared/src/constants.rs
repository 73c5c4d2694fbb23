//! Application-wide constants

/// Key prefix for cached franchises. Keys are never reused across entity types.
pub const FRANCHISE_CACHE_KEY_PREFIX: &str = "franchise:";

/// Fixed TTL for cached franchise entries.
pub const FRANCHISE_CACHE_TTL_SECS: u64 = 600;

pub const FRANCHISE_NAME_MIN_LEN: usize = 3;
pub const FRANCHISE_NAME_MAX_LEN: usize = 100;
pub const BRANCH_NAME_MIN_LEN: usize = 3;
pub const BRANCH_NAME_MAX_LEN: usize = 100;
pub const PRODUCT_NAME_MIN_LEN: usize = 2;
pub const PRODUCT_NAME_MAX_LEN: usize = 150;
