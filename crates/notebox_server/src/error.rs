//! HTTP error mapping for the notes API.
//!
//! # Responsibility
//! - Translate core use-case errors into status codes and JSON error bodies.
//!
//! # Invariants
//! - Absent notes always surface as 404 `{"error":"Note not found"}`.
//! - Storage/consistency failures surface as 500 with details kept in logs,
//!   never in the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use notebox_core::NoteServiceError;
use serde_json::json;

/// Error surfaced to HTTP clients.
#[derive(Debug)]
pub enum ApiError {
    /// Target note does not exist.
    NotFound,
    /// Request payload violates the note contract.
    InvalidInput(String),
    /// Unexpected storage or consistency failure; details are logged.
    Internal,
}

impl From<NoteServiceError> for ApiError {
    fn from(value: NoteServiceError) -> Self {
        match value {
            NoteServiceError::NoteNotFound(_) => Self::NotFound,
            NoteServiceError::Validation(err) => Self::InvalidInput(err.to_string()),
            other => {
                error!("event=request_failed module=http status=error error={other}");
                Self::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound => (StatusCode::NOT_FOUND, "Note not found".to_string()),
            Self::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
