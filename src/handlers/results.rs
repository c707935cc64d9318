use axum::{
    body::Bytes,
    extract::{Path, State},
};

use super::payload::ResultPayload;
use super::pipeline::{self, Results};
use crate::api::{CreatedResponse, MessageResponse, TopTimeResponse};
use crate::database::Store;
use crate::middleware::ApiResult;
use crate::state::AppState;

/// GET /api/top-times
pub async fn top_times(State(state): State<AppState>) -> ApiResult<Vec<TopTimeResponse>> {
    let times = state.store().top_times().await?;
    Ok(pipeline::list(times))
}

/// POST /api/results
pub async fn create(State(state): State<AppState>, body: Bytes) -> ApiResult<CreatedResponse> {
    let result = pipeline::parse_body::<ResultPayload>(&body)?;
    let id = state.store().create_result(result).await?;
    tracing::info!(id, "Result created");
    Ok(pipeline::created::<Results>(id))
}

/// DELETE /api/results/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<MessageResponse> {
    let id = pipeline::parse_id::<Results>(&id)?;
    state.store().delete_result(id).await?;
    Ok(pipeline::deleted::<Results>())
}
