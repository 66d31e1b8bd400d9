use crate::{
    config::Config,
    models::{ApiResponse, ApiResult, StatusData, API_VERSION},
};
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::debug;

/// Report the API version and the environment the service was started with
pub async fn api_status(State(config): State<Arc<Config>>) -> ApiResult<ApiResponse> {
    debug!("API status requested");

    let data = StatusData {
        api_version: API_VERSION.to_string(),
        environment: config.environment.clone(),
        database_url: config.db_url.clone(),
    };

    Ok(Json(ApiResponse::success(&data, "API is running successfully")?))
}
