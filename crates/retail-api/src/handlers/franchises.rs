//! Franchise HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use retail_core::domain::FranchiseDraft;

use crate::dto::{CreateFranchiseRequest, FranchiseDto, UpdateNameRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/v1/franchises
pub async fn create_franchise(
    State(state): State<AppState>,
    Json(payload): Json<CreateFranchiseRequest>,
) -> Result<(StatusCode, Json<FranchiseDto>), ApiError> {
    info!("Creating new franchise: {}", payload.name);
    let franchise = state
        .franchises
        .create(FranchiseDraft { name: payload.name })
        .await?;
    Ok((StatusCode::CREATED, Json(franchise.into())))
}

/// PATCH /api/v1/franchises/{id}/name
pub async fn rename_franchise(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateNameRequest>,
) -> Result<Json<FranchiseDto>, ApiError> {
    info!("Updating franchise {} name to: {}", id, payload.name);
    let franchise = state
        .franchises
        .rename(id, FranchiseDraft { name: payload.name })
        .await?;
    Ok(Json(franchise.into()))
}

/// GET /api/v1/franchises/{id}
pub async fn get_franchise(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FranchiseDto>, ApiError> {
    info!("Getting franchise: {}", id);
    let franchise = state.franchises.get_by_id(id).await?;
    Ok(Json(franchise.into()))
}

/// GET /api/v1/franchises
pub async fn list_franchises(
    State(state): State<AppState>,
) -> Result<Json<Vec<FranchiseDto>>, ApiError> {
    info!("Getting all franchises");
    let franchises = state.franchises.list_all().await?;
    Ok(Json(franchises.into_iter().map(Into::into).collect()))
}
