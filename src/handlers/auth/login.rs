use axum::{body::Bytes, extract::State};
use serde::{Deserialize, Serialize};

use crate::auth::TokenStore;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub message: String,
}

/// POST /api/auth/login
///
/// Body: `{"password": "..."}`. A missing, empty or unparseable body is a 400;
/// a wrong password is a 401 and leaves the token store untouched.
pub async fn login(State(state): State<AppState>, body: Bytes) -> ApiResult<LoginResponse> {
    let password = serde_json::from_slice::<LoginRequest>(&body)
        .ok()
        .and_then(|req| req.password)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::bad_request("Password is required"))?;

    if !state.password_matches(&password) {
        tracing::warn!("Rejected admin login attempt");
        return Err(ApiError::unauthorized("Invalid password"));
    }

    let token = state.tokens().issue().await?;
    tracing::info!("Admin login succeeded");

    Ok(ApiResponse::success(LoginResponse {
        token,
        message: "Login successful".to_string(),
    }))
}
