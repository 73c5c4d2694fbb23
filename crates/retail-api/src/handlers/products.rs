//! Product HTTP handlers, including the per-franchise max-stock report

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use retail_core::domain::{ProductDraft, ProductRename, StockUpdate};

use crate::dto::{
    CreateProductRequest, ProductDto, StockReportDto, UpdateNameRequest, UpdateStockRequest,
};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/v1/branches/{id}/products
pub async fn add_product(
    State(state): State<AppState>,
    Path(branch_id): Path<i64>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductDto>), ApiError> {
    info!("Adding product {} to branch {}", payload.name, branch_id);
    let product = state
        .products
        .add_to_branch(branch_id, ProductDraft { name: payload.name, stock: payload.stock })
        .await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

/// GET /api/v1/branches/{id}/products
pub async fn list_products(
    State(state): State<AppState>,
    Path(branch_id): Path<i64>,
) -> Result<Json<Vec<ProductDto>>, ApiError> {
    info!("Getting products for branch: {}", branch_id);
    let products = state.products.list_by_branch(branch_id).await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// DELETE /api/v1/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    info!("Deleting product: {}", product_id);
    state.products.delete(product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/products/{id}/stock
pub async fn update_product_stock(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    Json(payload): Json<UpdateStockRequest>,
) -> Result<Json<ProductDto>, ApiError> {
    info!("Updating product {} stock to: {}", product_id, payload.stock);
    let product = state
        .products
        .update_stock(product_id, StockUpdate { stock: payload.stock })
        .await?;
    Ok(Json(product.into()))
}

/// PATCH /api/v1/products/{id}/name
pub async fn rename_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    Json(payload): Json<UpdateNameRequest>,
) -> Result<Json<ProductDto>, ApiError> {
    info!("Updating product {} name to: {}", product_id, payload.name);
    let product = state
        .products
        .rename(product_id, ProductRename { name: payload.name })
        .await?;
    Ok(Json(product.into()))
}

/// GET /api/v1/franchises/{id}/max-stock-products
pub async fn max_stock_products(
    State(state): State<AppState>,
    Path(franchise_id): Path<i64>,
) -> Result<Json<Vec<StockReportDto>>, ApiError> {
    info!("Generating max-stock report for franchise: {}", franchise_id);
    let report = state.reports.max_stock_report(franchise_id).await?;
    Ok(Json(report.into_iter().map(Into::into).collect()))
}
