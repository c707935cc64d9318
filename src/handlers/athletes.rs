//! /api/athletes

use axum::{
    body::Bytes,
    extract::{Path, State},
};

use super::payload::AthletePayload;
use super::pipeline::{self, Athletes};
use crate::api::{AthleteResponse, CreatedResponse, MessageResponse};
use crate::database::Store;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/athletes
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<AthleteResponse>> {
    let athletes = state.store().list_athletes().await?;
    Ok(pipeline::list(athletes))
}

/// GET /api/athletes/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<AthleteResponse> {
    let id = pipeline::parse_id::<Athletes>(&id)?;
    let athlete = state
        .store()
        .get_athlete(id)
        .await?
        .ok_or_else(pipeline::not_found::<Athletes>)?;
    Ok(ApiResponse::success(athlete.into()))
}

/// POST /api/athletes
pub async fn create(State(state): State<AppState>, body: Bytes) -> ApiResult<CreatedResponse> {
    let athlete = pipeline::parse_body::<AthletePayload>(&body)?;
    let id = state.store().create_athlete(athlete).await?;
    tracing::info!(id, "Athlete created");
    Ok(pipeline::created::<Athletes>(id))
}

/// PUT /api/athletes/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<MessageResponse> {
    let id = pipeline::parse_id::<Athletes>(&id)?;
    let athlete = pipeline::parse_body::<AthletePayload>(&body)?;
    state.store().update_athlete(id, athlete).await?;
    Ok(pipeline::updated::<Athletes>())
}

/// DELETE /api/athletes/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    let id = pipeline::parse_id::<Athletes>(&id)?;
    state.store().delete_athlete(id).await?;
    Ok(pipeline::deleted::<Athletes>())
}
