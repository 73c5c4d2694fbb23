//! Stock report row

use serde::Serialize;

/// One row per (branch, max-stock product) pair within a franchise. Derived
/// at query time, never persisted. Ties within a branch produce one row per
/// tied product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockReport {
    pub product_id: i64,
    pub product_name: String,
    pub stock: i32,
    pub branch_id: i64,
    pub branch_name: String,
    pub franchise_id: i64,
    pub franchise_name: String,
}
