use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rulecheck_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for request-shape errors and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses. A failed validation is never an `AppError`: it is a 200 with
/// `isValid: false`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `rulecheck_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The body could not be read as JSON (syntax error, wrong content type).
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::InvalidBody(rejection) => (
                rejection.status(),
                "INVALID_REQUEST_BODY",
                rejection.body_text(),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        tracing::debug!(status = %status, code, error = %message, "Request rejected");

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
