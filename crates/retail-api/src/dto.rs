//! Request and response DTOs
//!
//! Child-creation payloads deliberately carry no parent-id field; the parent
//! always comes from the URL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use retail_core::domain::{Branch, Franchise, Product, StockReport};

#[derive(Debug, Deserialize)]
pub struct CreateFranchiseRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNameRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateBranchRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub stock: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStockRequest {
    pub stock: i32,
}

#[derive(Debug, Serialize)]
pub struct FranchiseDto {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Franchise> for FranchiseDto {
    fn from(franchise: Franchise) -> Self {
        Self {
            id: franchise.id,
            name: franchise.name,
            created_at: franchise.created_at,
            updated_at: franchise.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BranchDto {
    pub id: i64,
    pub name: String,
    pub franchise_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Branch> for BranchDto {
    fn from(branch: Branch) -> Self {
        Self {
            id: branch.id,
            name: branch.name,
            franchise_id: branch.franchise_id,
            created_at: branch.created_at,
            updated_at: branch.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub stock: i32,
    pub branch_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            stock: product.stock,
            branch_id: product.branch_id,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StockReportDto {
    pub product_id: i64,
    pub product_name: String,
    pub stock: i32,
    pub branch_id: i64,
    pub branch_name: String,
    pub franchise_id: i64,
    pub franchise_name: String,
}

impl From<StockReport> for StockReportDto {
    fn from(row: StockReport) -> Self {
        Self {
            product_id: row.product_id,
            product_name: row.product_name,
            stock: row.stock,
            branch_id: row.branch_id,
            branch_name: row.branch_name,
            franchise_id: row.franchise_id,
            franchise_name: row.franchise_name,
        }
    }
}
