use axum::{Json, response::IntoResponse};
use serde_json::json;

pub const SERVICE_NAME: &str = "Healthcare Mock API";

pub async fn get() -> impl IntoResponse {
    Json(json!({"status": "healthy", "service": SERVICE_NAME}))
}
