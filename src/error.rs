//! Error handling
//!
//! Request-level error taxonomy. Malformed URLs are NOT here: they are
//! recovered inside feature extraction and can never fail a request.
//! Internal failures respond with a generic body; the detail is logged
//! server-side only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// Request body lacked a required field or had the wrong type.
    MissingField(String),

    /// Classification failed unexpectedly after extraction succeeded.
    Classification(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::MissingField(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::Classification(msg) => {
                tracing::error!("Classification error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}
