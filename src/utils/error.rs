// Centralized request-error handling. Every failure a handler can raise
// is converted here into the uniform response envelope, with the error
// logged before the response is produced.

use std::any::Any;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Response, StatusCode},
    response::IntoResponse,
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::response::ResponseEnvelope;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        // Log the raw error before shaping the client-facing envelope.
        // The internal variant keeps its cause chain out of the response.
        match &self {
            ApiError::Internal(err) => error!("Unhandled error in request handler: {err:#}"),
            other => error!("Request failed: {other}"),
        }

        let status: StatusCode = self.status_code();
        (status, Json(ResponseEnvelope::error(self.to_string()))).into_response()
    }
}

/// Converts a handler panic into the same envelope shape with status 500,
/// so the envelope invariant holds even for unexpected crashes.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail: &str = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    error!("Request handler panicked: {detail}");

    let body: Vec<u8> = serde_json::to_vec(&ResponseEnvelope::error("Internal server error"))
        .unwrap_or_else(|_| br#"{"success":false,"message":"Internal server error"}"#.to_vec());

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
