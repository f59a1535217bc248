use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::state::AppState;

pub static HEALTH_TAG: &str = "health";

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(health))
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running")
    ),
)]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
