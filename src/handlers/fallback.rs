use crate::models::{ApiError, ApiResponse, INTERNAL_ERROR_MESSAGE};
use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;
use tracing::{debug, error};

/// Catch-all for requests that match no route
pub async fn not_found(uri: Uri) -> ApiError {
    debug!("No route for {}", uri);
    ApiError::NotFound
}

/// Turn a handler panic into the generic internal error response.
///
/// The panic payload is logged, never returned.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!(panic = %detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::failure(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}
