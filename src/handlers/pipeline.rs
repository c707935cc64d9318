//! Shared parse -> validate -> execute -> shape steps for resource handlers.

use serde::de::DeserializeOwned;

use super::payload::Validate;
use crate::api::{CreatedResponse, MessageResponse};
use crate::error::ApiError;
use crate::middleware::ApiResponse;

/// Naming for an entity exposed over the API
pub trait Resource {
    /// Capitalized singular, e.g. "Athlete"
    const NAME: &'static str;
}

pub struct Athletes;
pub struct Meets;
pub struct Results;

impl Resource for Athletes {
    const NAME: &'static str = "Athlete";
}

impl Resource for Meets {
    const NAME: &'static str = "Meet";
}

impl Resource for Results {
    const NAME: &'static str = "Result";
}

/// Path id -> i32, or "Invalid <entity> ID"
pub fn parse_id<R: Resource>(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::bad_request(format!("Invalid {} ID", R::NAME.to_lowercase())))
}

/// Decode a JSON body and validate it. Decoder errors reach the client verbatim.
pub fn parse_body<P>(body: &[u8]) -> Result<P::Output, ApiError>
where
    P: DeserializeOwned + Validate,
{
    let payload: P =
        serde_json::from_slice(body).map_err(|e| ApiError::bad_request(e.to_string()))?;
    Ok(payload.validate()?)
}

pub fn not_found<R: Resource>() -> ApiError {
    ApiError::not_found(format!("{} not found", R::NAME))
}

/// Rows -> wire shapes; an empty input yields `[]`
pub fn list<Row, Out: From<Row> + serde::Serialize>(rows: Vec<Row>) -> ApiResponse<Vec<Out>> {
    ApiResponse::success(rows.into_iter().map(Out::from).collect())
}

pub fn created<R: Resource>(id: i32) -> ApiResponse<CreatedResponse> {
    ApiResponse::created(CreatedResponse {
        id,
        message: format!("{} created", R::NAME),
    })
}

pub fn updated<R: Resource>() -> ApiResponse<MessageResponse> {
    ApiResponse::success(MessageResponse::new(format!("{} updated", R::NAME)))
}

pub fn deleted<R: Resource>() -> ApiResponse<MessageResponse> {
    ApiResponse::success(MessageResponse::new(format!("{} deleted", R::NAME)))
}
