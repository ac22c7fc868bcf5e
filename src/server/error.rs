//! Request-level error handling.
//!
//! Errors carry an explicit kind so recovered statuses (rendered inline
//! with HTTP 200 by handlers) stay distinguishable from propagated
//! failures, which surface here as 4xx/5xx responses.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use super::template_structs::ErrorTemplate;
use crate::extract::ExtractionError;
use crate::inference::InferenceError;

/// Errors a handler can propagate.
#[derive(Debug, Error)]
pub enum AppError {
    /// The caller supplied a word limit that is missing, non-numeric, or zero.
    #[error("Invalid word limit: {0}")]
    InvalidWordLimit(String),

    /// The multipart upload could not be decoded.
    #[error("Upload error: {0}")]
    Upload(String),

    /// Model invocation failed; not recovered for summarization.
    #[error(transparent)]
    Inference(#[from] InferenceError),

    /// Catastrophic I/O during text extraction.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidWordLimit(_) | AppError::Upload(_) => StatusCode::BAD_REQUEST,
            AppError::Inference(_)
            | AppError::Extraction(_)
            | AppError::Template(_)
            | AppError::Io(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("request failed: {}", message);
        } else {
            tracing::warn!("rejected request: {}", message);
        }

        let template = ErrorTemplate {
            title: "Error",
            message: &message,
        };
        let body = template.render().unwrap_or(message);
        (status, Html(body)).into_response()
    }
}
