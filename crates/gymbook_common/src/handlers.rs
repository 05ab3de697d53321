// --- File: crates/gymbook_common/src/handlers.rs ---

// Handlers shared by every deployment, independent of enabled features.

use axum::Json;
use serde::Serialize;

/// Service name reported by the health check.
pub const SERVICE_NAME: &str = "gym-reservation-api";

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Liveness probe.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "Health"
))]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
