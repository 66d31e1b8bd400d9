use utoipa::OpenApi;
use crate::models::*;

/// Root health check endpoint
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn root_doc() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// API status endpoint
#[utoipa::path(
    get,
    path = "/api/v1/status",
    responses(
        (status = 200, description = "API version and environment", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
#[allow(dead_code)]
pub async fn api_status_doc() {}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "UFDR Copilot API",
        description = "Secure Forensic Analysis Platform API",
        version = "1.0.0"
    ),
    paths(
        root_doc,
        health_check_doc,
        api_status_doc,
    ),
    components(
        schemas(HealthResponse, HealthStatus, ApiResponse, StatusData)
    ),
    tags(
        (name = "api", description = "API endpoints")
    )
)]
pub struct ApiDoc;
