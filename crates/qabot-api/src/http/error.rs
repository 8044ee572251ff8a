//! Application error type mapping to HTTP status codes and envelope format.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use qabot_types::error::QaError;

use crate::http::response::{ApiResponse, new_request_id};

/// Application-level error that maps to HTTP responses.
///
/// Generation failures never show up here: they are answers with a failed
/// outcome and go out as 200.
#[derive(Debug)]
pub enum AppError {
    /// Interaction handler failure (the answer could not be stored).
    Qa(QaError),
    /// Malformed request body.
    Validation(String),
}

impl From<QaError> for AppError {
    fn from(e: QaError) -> Self {
        AppError::Qa(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Qa(e) => {
                tracing::error!(error = %e, "question failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR", e.to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
        };

        let body = ApiResponse::error(code, &message, new_request_id(), 0);
        (status, Json(body)).into_response()
    }
}
