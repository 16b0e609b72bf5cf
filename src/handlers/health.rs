use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. Always succeeds while the process is running; does not
/// touch storage.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
