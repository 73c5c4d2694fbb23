// ============================================================================
// Retail Core - Stock Aggregation Engine
// File: crates/retail-core/src/services/stock_report_service.rs
// ============================================================================
//! Per-franchise "maximum stock product per branch" report.
//!
//! Grouping is per branch, not per franchise: each branch contributes the
//! product(s) holding its own maximum stock, and ties within a branch all
//! appear in the result.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::StockReport;
use crate::error::DomainError;
use crate::repositories::{BranchRepository, FranchiseRepository, ProductRepository};

pub struct StockReportService<F, B, P> {
    franchises: Arc<F>,
    branches: Arc<B>,
    products: Arc<P>,
}

impl<F, B, P> StockReportService<F, B, P>
where
    F: FranchiseRepository,
    B: BranchRepository,
    P: ProductRepository,
{
    pub fn new(franchises: Arc<F>, branches: Arc<B>, products: Arc<P>) -> Self {
        Self { franchises, branches, products }
    }

    pub async fn max_stock_report(
        &self,
        franchise_id: i64,
    ) -> Result<Vec<StockReport>, DomainError> {
        let franchise = self
            .franchises
            .find_by_id(franchise_id)
            .await?
            .ok_or(DomainError::NotFound { entity: "Franchise", id: franchise_id })?;

        let branches = self.branches.find_by_franchise_id(franchise_id).await?;
        if branches.is_empty() {
            debug!("Franchise {} has no branches, report is empty", franchise_id);
            return Ok(Vec::new());
        }

        let branch_ids: Vec<i64> = branches.iter().map(|b| b.id).collect();
        let products = self.products.find_max_stock_by_branches(&branch_ids).await?;

        let branch_names: HashMap<i64, &str> =
            branches.iter().map(|b| (b.id, b.name.as_str())).collect();

        let mut report = Vec::with_capacity(products.len());
        for product in products {
            // A cascade delete can race the grouped query; a product whose
            // branch is gone has no display row.
            let Some(branch_name) = branch_names.get(&product.branch_id) else {
                warn!(
                    "Skipping product {}: branch {} no longer exists",
                    product.id, product.branch_id
                );
                continue;
            };
            report.push(StockReport {
                product_id: product.id,
                product_name: product.name,
                stock: product.stock,
                branch_id: product.branch_id,
                branch_name: (*branch_name).to_string(),
                franchise_id: franchise.id,
                franchise_name: franchise.name.clone(),
            });
        }

        debug!("Generated stock report for franchise: {}", franchise_id);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Branch, Franchise, Product};
    use crate::repositories::{
        MockBranchRepository, MockFranchiseRepository, MockProductRepository,
    };
    use chrono::{TimeZone, Utc};

    fn franchise(id: i64, name: &str) -> Franchise {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        Franchise {
            id,
            name: name.to_string(),
            created_at: at,
            updated_at: at,
        }
    }

    fn branch(id: i64, franchise_id: i64, name: &str) -> Branch {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        Branch {
            id,
            name: name.to_string(),
            franchise_id,
            created_at: at,
            updated_at: at,
        }
    }

    fn product(id: i64, branch_id: i64, name: &str, stock: i32) -> Product {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        Product {
            id,
            name: name.to_string(),
            stock,
            branch_id,
            created_at: at,
            updated_at: at,
        }
    }

    fn service(
        franchises: MockFranchiseRepository,
        branches: MockBranchRepository,
        products: MockProductRepository,
    ) -> StockReportService<MockFranchiseRepository, MockBranchRepository, MockProductRepository>
    {
        StockReportService::new(Arc::new(franchises), Arc::new(branches), Arc::new(products))
    }

    #[tokio::test]
    async fn report_groups_per_branch_and_keeps_all_ties() {
        let mut franchises = MockFranchiseRepository::new();
        let mut branches = MockBranchRepository::new();
        let mut products = MockProductRepository::new();

        franchises
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .returning(|_| Ok(Some(franchise(1, "Acme"))));
        branches
            .expect_find_by_franchise_id()
            .withf(|id| *id == 1)
            .returning(|_| Ok(vec![branch(10, 1, "B1"), branch(20, 1, "B2")]));
        // B1 holds stocks 10 and 30; B2 holds 30 and 30. The grouped query
        // returns the per-branch maxima: one row for B1, two tied for B2.
        products
            .expect_find_max_stock_by_branches()
            .withf(|ids: &[i64]| ids == [10, 20])
            .times(1)
            .returning(|_| {
                Ok(vec![
                    product(101, 10, "B1 Winner", 30),
                    product(201, 20, "B2 Tie A", 30),
                    product(202, 20, "B2 Tie B", 30),
                ])
            });

        let report = service(franchises, branches, products)
            .max_stock_report(1)
            .await
            .unwrap();

        assert_eq!(report.len(), 3);
        assert!(report.iter().all(|row| row.franchise_name == "Acme"));
        assert_eq!(
            report.iter().filter(|row| row.branch_id == 20).count(),
            2,
            "both tied products of B2 must be reported"
        );
        let b1_row = report.iter().find(|row| row.branch_id == 10).unwrap();
        assert_eq!(b1_row.product_name, "B1 Winner");
        assert_eq!(b1_row.branch_name, "B1");
        assert_eq!(b1_row.stock, 30);
    }

    #[tokio::test]
    async fn report_for_branchless_franchise_is_empty_not_an_error() {
        let mut franchises = MockFranchiseRepository::new();
        let mut branches = MockBranchRepository::new();
        let mut products = MockProductRepository::new();

        franchises
            .expect_find_by_id()
            .returning(|_| Ok(Some(franchise(1, "Acme"))));
        branches
            .expect_find_by_franchise_id()
            .returning(|_| Ok(Vec::new()));
        products.expect_find_max_stock_by_branches().times(0);

        let report = service(franchises, branches, products)
            .max_stock_report(1)
            .await
            .unwrap();
        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn report_for_missing_franchise_is_not_found() {
        let mut franchises = MockFranchiseRepository::new();
        let mut branches = MockBranchRepository::new();
        let products = MockProductRepository::new();

        franchises.expect_find_by_id().returning(|_| Ok(None));
        branches.expect_find_by_franchise_id().times(0);

        let err = service(franchises, branches, products)
            .max_stock_report(404)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Franchise", id: 404 }));
    }

    #[tokio::test]
    async fn report_skips_products_whose_branch_vanished() {
        let mut franchises = MockFranchiseRepository::new();
        let mut branches = MockBranchRepository::new();
        let mut products = MockProductRepository::new();

        franchises
            .expect_find_by_id()
            .returning(|_| Ok(Some(franchise(1, "Acme"))));
        branches
            .expect_find_by_franchise_id()
            .returning(|_| Ok(vec![branch(10, 1, "B1")]));
        products
            .expect_find_max_stock_by_branches()
            .returning(|_| {
                Ok(vec![
                    product(101, 10, "Kept", 30),
                    product(999, 99, "Orphan", 50),
                ])
            });

        let report = service(franchises, branches, products)
            .max_stock_report(1)
            .await
            .unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].product_name, "Kept");
    }

    #[tokio::test]
    async fn two_products_with_equal_stock_in_one_branch_both_report() {
        let mut franchises = MockFranchiseRepository::new();
        let mut branches = MockBranchRepository::new();
        let mut products = MockProductRepository::new();

        franchises
            .expect_find_by_id()
            .returning(|_| Ok(Some(franchise(1, "Acme"))));
        branches
            .expect_find_by_franchise_id()
            .returning(|_| Ok(vec![branch(2, 1, "Downtown")]));
        products
            .expect_find_max_stock_by_branches()
            .returning(|_| {
                Ok(vec![
                    product(31, 2, "Widget", 5),
                    product(32, 2, "Gadget", 5),
                ])
            });

        let report = service(franchises, branches, products)
            .max_stock_report(1)
            .await
            .unwrap();

        assert_eq!(report.len(), 2);
        let names: Vec<&str> = report.iter().map(|row| row.product_name.as_str()).collect();
        assert!(names.contains(&"Widget"));
        assert!(names.contains(&"Gadget"));
        assert!(report.iter().all(|row| row.branch_name == "Downtown"));
    }
}
