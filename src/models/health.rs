use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Version reported by every health and status payload
pub const API_VERSION: &str = "1.0.0";

/// Liveness state of the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// API response for health check
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub message: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy(message: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Healthy,
            message: message.into(),
            version: API_VERSION.to_string(),
        }
    }
}
