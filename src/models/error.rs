use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::ApiResponse;

pub const NOT_FOUND_MESSAGE: &str = "Endpoint not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Failures a handler can report to the client.
///
/// Only a fixed message ever reaches the response body. The detail carried by
/// [`ApiError::Internal`] is written to the log and dropped.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("endpoint not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<Json<T>, ApiError>;

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::NotFound => NOT_FOUND_MESSAGE,
            ApiError::Internal(detail) => {
                error!(error = %detail, "Request failed with internal error");
                INTERNAL_ERROR_MESSAGE
            }
        };

        (self.status_code(), Json(ApiResponse::failure(message))).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Internal(format!("failed to encode response data: {e}"))
    }
}
