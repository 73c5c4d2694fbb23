//! Domain entities for the franchise -> branch -> product hierarchy.

pub mod branch;
pub mod franchise;
pub mod product;
pub mod stock_report;

pub use branch::{Branch, BranchDraft, NewBranch};
pub use franchise::{Franchise, FranchiseDraft, NewFranchise};
pub use product::{NewProduct, Product, ProductDraft, ProductRename, StockUpdate};
pub use stock_report::StockReport;

use validator::ValidationError;

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}
