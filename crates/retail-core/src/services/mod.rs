//! Application services

pub mod branch_service;
pub mod franchise_service;
pub mod product_service;
pub mod stock_report_service;

pub use branch_service::BranchService;
pub use franchise_service::FranchiseService;
pub use product_service::ProductService;
pub use stock_report_service::StockReportService;
