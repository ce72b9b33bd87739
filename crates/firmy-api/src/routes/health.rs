use axum::Json;

use crate::dto::HealthResponse;

/// GET /api/health
pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
