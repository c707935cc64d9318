use axum::response::Json;
use serde_json::{json, Value};

pub const API_NAME: &str = "Jones County XC API";

/// GET /health - liveness only, does not touch the database
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": format!("{} is running", API_NAME),
    }))
}

/// GET /api
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": API_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
