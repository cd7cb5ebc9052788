use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
///
/// Ready once the portfolio content is loaded and valid. The contact
/// endpoint is external and not probed.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    match state.portfolio.validate() {
        Ok(()) => (StatusCode::OK, Json(json!({"status": "ready"}))),
        Err(e) => {
            tracing::error!("Readiness check failed: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "reason": "invalid_content"
                })),
            )
        }
    }
}
