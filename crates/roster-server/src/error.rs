//! Server error types with HTTP status code mapping

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_ingest::IngestError;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by request handlers.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Detail lookup with an id outside the loaded roster.
    #[error("Member not found")]
    MemberNotFound,

    /// Roster source exists but could not be read or parsed.
    #[error("Failed to load member roster: {0}")]
    Ingest(#[from] IngestError),

    /// Blocking load task panicked or was cancelled.
    #[error("Roster load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::MemberNotFound => StatusCode::NOT_FOUND,
            ServerError::Ingest(_) | ServerError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to clients. Internal failures stay generic.
    fn public_message(&self) -> String {
        match self {
            ServerError::MemberNotFound => self.to_string(),
            ServerError::Ingest(_) | ServerError::Task(_) => {
                "Failed to load member roster".to_string()
            }
        }
    }
}

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }
        let body = ErrorResponse {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}
