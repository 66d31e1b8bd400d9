use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload carried in `data` by the API status endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusData {
    pub api_version: String,
    pub environment: String,
    pub database_url: String,
}
