use crate::{config::Config, handlers::{api_status, not_found}};
use axum::{routing::get, Router};
use std::sync::Arc;

/// Create API routes
pub fn create_api_routes() -> Router<Arc<Config>> {
    Router::<Arc<Config>>::new()
        .route("/v1/status", get(api_status).fallback(not_found))
}
