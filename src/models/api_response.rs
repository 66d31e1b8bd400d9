use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::ApiError;

/// Uniform envelope for every non-health API response.
///
/// A successful response always carries `data`; a failed one never does, and
/// `data` is then left out of the JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub data: Option<Map<String, Value>>,
    #[serde(default)]
    pub message: String,
}

impl ApiResponse {
    /// Wrap `data` in a successful envelope.
    ///
    /// `data` must serialize to a JSON object; any other shape is an internal
    /// error.
    pub fn success<T: Serialize>(data: &T, message: impl Into<String>) -> Result<Self, ApiError> {
        match serde_json::to_value(data)? {
            Value::Object(map) => Ok(Self {
                success: true,
                data: Some(map),
                message: message.into(),
            }),
            other => Err(ApiError::Internal(format!(
                "response data must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
