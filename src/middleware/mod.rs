pub mod auth;
pub mod response;

pub use auth::{authorize, extract_bearer_token, guard_writes, BearerError};
pub use response::{ApiResponse, ApiResult};
