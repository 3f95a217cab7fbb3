//! Liveness and health handlers.

use axum::Json;

use crate::dto::response::HealthResponse;

/// GET /
pub async fn root() -> &'static str {
    "Vitrine API running"
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
