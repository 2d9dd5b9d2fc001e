//! Application error type and HTTP error contract.
//!
//! Errors surface to clients as a flat JSON body `{"error": <message>}`
//! with the matching status code; callers render the message and clear it
//! after a fixed display duration.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::infrastructure::mailer::MailerError;

/// JSON body for error responses.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors a request handler can surface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request payload failed validation.
    #[error("{0}")]
    Validation(String),

    /// The mail collaborator could not deliver the message.
    #[error("Failed to send email.")]
    Delivery(#[source] MailerError),

    /// Anything unexpected.
    #[error("Server error. Please try again.")]
    Internal(#[from] anyhow::Error),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        // Surface one declared message; when several fields fail any of
        // their messages is an accurate answer.
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(ToString::to_string))
            .unwrap_or_else(|| "All fields are required.".to_string());

        Self::Validation(message)
    }
}

impl From<MailerError> for AppError {
    fn from(e: MailerError) -> Self {
        Self::Delivery(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Delivery(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
