use std::sync::Arc;

use retail_core::services::{BranchService, FranchiseService, ProductService, StockReportService};
use retail_infrastructure::{
    PgBranchRepository, PgFranchiseRepository, PgProductRepository, RedisCache,
};

pub type Franchises = FranchiseService<PgFranchiseRepository, RedisCache>;
pub type Branches = BranchService<PgBranchRepository, PgFranchiseRepository>;
pub type Products = ProductService<PgProductRepository, PgBranchRepository>;
pub type Reports =
    StockReportService<PgFranchiseRepository, PgBranchRepository, PgProductRepository>;

#[derive(Clone)]
pub struct AppState {
    pub franchises: Arc<Franchises>,
    pub branches: Arc<Branches>,
    pub products: Arc<Products>,
    pub reports: Arc<Reports>,
}
