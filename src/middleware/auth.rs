use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, Method},
    middleware::Next,
    response::Response,
};

use crate::auth::TokenStore;
use crate::error::ApiError;
use crate::state::AppState;

/// Why a bearer token could not be read from the headers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BearerError {
    Missing,
    Malformed,
}

/// Extract the token from `Authorization: Bearer <token>`.
///
/// The header must split on single spaces into exactly two parts, the first
/// being `Bearer`. An empty header counts as missing.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, BearerError> {
    let header = headers.get(AUTHORIZATION).ok_or(BearerError::Missing)?;
    if header.is_empty() {
        return Err(BearerError::Missing);
    }

    let value = header.to_str().map_err(|_| BearerError::Malformed)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(BearerError::Malformed),
    }
}

/// Header + token check shared by every gated route.
/// Nothing is attached to the request on success.
pub async fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let token = extract_bearer_token(headers).map_err(|err| match err {
        BearerError::Missing => ApiError::unauthorized("Authorization header required"),
        BearerError::Malformed => ApiError::unauthorized("Invalid authorization format"),
    })?;

    if !state.tokens().validate(token).await {
        return Err(ApiError::unauthorized("Invalid or expired token"));
    }

    Ok(())
}

fn is_write(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH | Method::DELETE)
}

/// Applies `authorize` to mutating requests when REQUIRE_AUTH_FOR_WRITES is on.
/// Reads always pass through.
pub async fn guard_writes(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if state.require_auth_for_writes() && is_write(request.method()) {
        authorize(&state, request.headers()).await?;
    }

    Ok(next.run(request).await)
}
