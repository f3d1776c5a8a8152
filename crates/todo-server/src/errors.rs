//! API error type and its HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use todo_core::envelope::ApiResponse;
use todo_core::errors::FieldError;
use todo_store::StoreError;

/// Errors a request handler can produce.
///
/// Every variant maps to one status code and one envelope message via
/// [`IntoResponse`]. Store failures are logged server-side and surface as a
/// generic message — internal detail never reaches the response body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed field validation.
    #[error(transparent)]
    Validation(#[from] FieldError),
    /// Request body was not parseable JSON.
    #[error("Malformed JSON body")]
    MalformedBody,
    /// No todo exists with the requested ID.
    #[error("Not found any todo with id: {id}")]
    NotFound {
        /// The ID the request asked for.
        id: String,
    },
    /// A dependency the endpoint relies on is down.
    #[error("{message}")]
    Unavailable {
        /// Client-facing description of what is down.
        message: String,
    },
    /// Database failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Build the 404 for a missing todo ID.
    pub fn not_found(id: &str) -> Self {
        Self::NotFound { id: id.to_owned() }
    }

    /// The status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedBody => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message placed in the response envelope.
    ///
    /// Store errors collapse to a fixed string; their detail only goes to
    /// the server log.
    fn public_message(&self) -> String {
        match self {
            Self::Store(_) => "Internal error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "request failed");
        }
        let body: ApiResponse<()> = ApiResponse::error(self.public_message());
        (status, Json(body)).into_response()
    }
}

/// Result type for handler bodies.
pub type Result<T> = std::result::Result<T, ApiError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
