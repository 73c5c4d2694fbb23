//! Franchise domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Root of the retail hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Franchise {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert shape; the id is assigned by the store on save.
#[derive(Debug, Clone)]
pub struct NewFranchise {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for franchise creation and rename.
#[derive(Debug, Clone, Validate)]
pub struct FranchiseDraft {
    #[validate(
        length(min = 3, max = 100, message = "Name must be between 3 and 100 characters"),
        custom(function = crate::domain::not_blank)
    )]
    pub name: String,
}
