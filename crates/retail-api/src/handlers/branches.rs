//! Branch HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use retail_core::domain::BranchDraft;

use crate::dto::{BranchDto, CreateBranchRequest, UpdateNameRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/v1/franchises/{id}/branches
pub async fn add_branch(
    State(state): State<AppState>,
    Path(franchise_id): Path<i64>,
    Json(payload): Json<CreateBranchRequest>,
) -> Result<(StatusCode, Json<BranchDto>), ApiError> {
    info!("Adding branch {} to franchise {}", payload.name, franchise_id);
    let branch = state
        .branches
        .add_to_franchise(franchise_id, BranchDraft { name: payload.name })
        .await?;
    Ok((StatusCode::CREATED, Json(branch.into())))
}

/// PATCH /api/v1/branches/{id}/name
pub async fn rename_branch(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateNameRequest>,
) -> Result<Json<BranchDto>, ApiError> {
    info!("Updating branch {} name to: {}", id, payload.name);
    let branch = state
        .branches
        .rename(id, BranchDraft { name: payload.name })
        .await?;
    Ok(Json(branch.into()))
}

/// GET /api/v1/franchises/{id}/branches
pub async fn list_branches(
    State(state): State<AppState>,
    Path(franchise_id): Path<i64>,
) -> Result<Json<Vec<BranchDto>>, ApiError> {
    info!("Getting branches for franchise: {}", franchise_id);
    let branches = state.branches.list_by_franchise(franchise_id).await?;
    Ok(Json(branches.into_iter().map(Into::into).collect()))
}
