// Unified response envelope shared by feature handlers, the fallback
// handler and the error path.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// The JSON shape every terminal response conforms to.
#[derive(Debug, Serialize, ToSchema)]
pub struct ResponseEnvelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ResponseEnvelope {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Convenience builder for handlers: carries a status code, a message and
/// an optional payload, and renders as a `ResponseEnvelope`.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status_code: StatusCode,
    pub message: String,
    pub data: Option<Value>,
}

impl ApiResponse {
    /// Creates a new response with the given status code
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            message: String::new(),
            data: None,
        }
    }

    /// Sets the human-readable message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attaches a JSON data payload
    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let envelope: ResponseEnvelope = ResponseEnvelope {
            success: self.status_code.is_success(),
            message: self.message,
            data: self.data,
        };

        (self.status_code, Json(envelope)).into_response()
    }
}
