//! Error types for the ideation backend.
//!
//! - [`StoreError`] - Content/vote store errors
//! - [`AiError`] - Title suggestion client errors
//! - [`ServerError`] - HTTP layer errors, rendered as JSON responses
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::types::error_response;

// =============================================================================
// Store Errors
// =============================================================================

/// Errors from the in-memory content store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Referenced item does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Submitted content is unusable (empty title, etc.).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Seed file could not be read.
    #[error("Seed IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Seed file is not valid JSON.
    #[error("Seed JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound { kind, id: id.into() }
    }
}

// =============================================================================
// AI Client Errors
// =============================================================================

/// Errors from the title suggestion client.
#[derive(Debug, Error)]
pub enum AiError {
    /// Missing API key.
    #[error("Missing ANTHROPIC_API_KEY environment variable")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API answered with an error payload.
    #[error("API error: {0}")]
    ApiError(String),

    /// Response could not be turned into suggestions.
    #[error("Invalid AI response: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Store error.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Invalid request.
    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ServerError::Store(StoreError::InvalidInput(_)) | ServerError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Unparseable or incomplete JSON bodies are client errors like any other.
impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        eprintln!("❌ {} {}", status.as_u16(), self);
        (status, Json(error_response(&self.to_string()))).into_response()
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for AI operations.
pub type AiResult<T> = Result<T, AiError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_maps_to_status() {
        let err: ServerError = StoreError::not_found("Idea", "abc").into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("abc"));

        let err: ServerError = StoreError::InvalidInput("empty title".into()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err: ServerError = StoreError::InvalidInput("x".into()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "seed.json");
        let err: ServerError = StoreError::from(io).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
