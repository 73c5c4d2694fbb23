//! Product domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A product always belongs to one branch; `branch_id` is set at creation
/// from the command context and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub stock: i32,
    pub branch_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert shape; only the service layer constructs this, so the parent id
/// can never come from a client payload.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub stock: i32,
    pub branch_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for product creation. Carries no parent id.
#[derive(Debug, Clone, Validate)]
pub struct ProductDraft {
    #[validate(
        length(min = 2, max = 150, message = "Name must be between 2 and 150 characters"),
        custom(function = crate::domain::not_blank)
    )]
    pub name: String,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i32,
}

/// Validated input for a product rename.
#[derive(Debug, Clone, Validate)]
pub struct ProductRename {
    #[validate(
        length(min = 2, max = 150, message = "Name must be between 2 and 150 characters"),
        custom(function = crate::domain::not_blank)
    )]
    pub name: String,
}

/// Validated input for a stock adjustment.
#[derive(Debug, Clone, Validate)]
pub struct StockUpdate {
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i32,
}
