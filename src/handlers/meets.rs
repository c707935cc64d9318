//! /api/meets

use axum::{
    body::Bytes,
    extract::{Path, State},
};

use super::payload::MeetPayload;
use super::pipeline::{self, Meets};
use crate::api::{CreatedResponse, MeetResponse, MessageResponse, ResultResponse};
use crate::database::Store;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<MeetResponse>> {
    let meets = state.store().list_meets().await?;
    Ok(pipeline::list(meets))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<MeetResponse> {
    let id = pipeline::parse_id::<Meets>(&id)?;
    let meet = state
        .store()
        .get_meet(id)
        .await?
        .ok_or_else(pipeline::not_found::<Meets>)?;
    Ok(ApiResponse::success(meet.into()))
}

pub async fn create(State(state): State<AppState>, body: Bytes) -> ApiResult<CreatedResponse> {
    let meet = pipeline::parse_body::<MeetPayload>(&body)?;
    let id = state.store().create_meet(meet).await?;
    tracing::info!(id, "Meet created");
    Ok(pipeline::created::<Meets>(id))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<MessageResponse> {
    let id = pipeline::parse_id::<Meets>(&id)?;
    let meet = pipeline::parse_body::<MeetPayload>(&body)?;
    state.store().update_meet(id, meet).await?;
    Ok(pipeline::updated::<Meets>())
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<MessageResponse> {
    let id = pipeline::parse_id::<Meets>(&id)?;
    state.store().delete_meet(id).await?;
    Ok(pipeline::deleted::<Meets>())
}

/// GET /api/meets/:id/results - no existence check; an unknown meet yields `[]`
pub async fn results(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<ResultResponse>> {
    let id = pipeline::parse_id::<Meets>(&id)?;
    let results = state.store().results_for_meet(id).await?;
    Ok(pipeline::list(results))
}
