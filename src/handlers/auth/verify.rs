use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
};
use serde_json::{json, Value};

use crate::auth::TokenStore;
use crate::middleware::{extract_bearer_token, BearerError};
use crate::state::AppState;

/// GET /api/auth/verify - reports `valid` instead of failing like the gate does
pub async fn verify(State(state): State<AppState>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let token = match extract_bearer_token(&headers) {
        Ok(token) => token,
        Err(BearerError::Missing) => return invalid("No token provided"),
        Err(BearerError::Malformed) => return invalid("Invalid format"),
    };

    if state.tokens().validate(token).await {
        (StatusCode::OK, Json(json!({ "valid": true })))
    } else {
        invalid("Invalid or expired token")
    }
}

fn invalid(error: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "valid": false, "error": error })),
    )
}
