use axum::{extract::State, http::HeaderMap};

use crate::api::MessageResponse;
use crate::auth::TokenStore;
use crate::middleware::{extract_bearer_token, ApiResponse};
use crate::state::AppState;

/// POST /api/auth/logout - always succeeds; a readable token is revoked
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> ApiResponse<MessageResponse> {
    if let Ok(token) = extract_bearer_token(&headers) {
        state.tokens().revoke(token).await;
    }

    ApiResponse::success(MessageResponse::new("Logged out successfully"))
}
