//! Branch domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A branch always belongs to one franchise; `franchise_id` is set at
/// creation from the command context and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: i64,
    pub name: String,
    pub franchise_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert shape; only the service layer constructs this, so the parent id
/// can never come from a client payload.
#[derive(Debug, Clone)]
pub struct NewBranch {
    pub name: String,
    pub franchise_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for branch creation and rename. Carries no parent id.
#[derive(Debug, Clone, Validate)]
pub struct BranchDraft {
    #[validate(
        length(min = 3, max = 100, message = "Name must be between 3 and 100 characters"),
        custom(function = crate::domain::not_blank)
    )]
    pub name: String,
}
