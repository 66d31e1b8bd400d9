use axum::Json;
use crate::models::HealthResponse;
use tracing::debug;

/// Root endpoint, doubles as a health check
pub async fn root() -> Json<HealthResponse> {
    debug!("Root health check requested");
    Json(HealthResponse::healthy("UFDR Copilot API is running"))
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse::healthy("API is operational"))
}
