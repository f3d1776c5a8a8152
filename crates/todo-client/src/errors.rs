//! Client-side error types.

use thiserror::Error;
use todo_core::ErrorBody;

/// Convenience alias for client results.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by the API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with the error arm of the envelope.
    #[error("{message}")]
    Api {
        /// Message carried by the error envelope.
        message: String,
    },

    /// Transport or decode failure below the envelope.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl From<ErrorBody> for ClientError {
    fn from(error: ErrorBody) -> Self {
        Self::Api {
            message: error.message,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_bare_message() {
        let err = ClientError::Api {
            message: "Not found any todo with id: task-1".into(),
        };
        assert_eq!(err.to_string(), "Not found any todo with id: task-1");
    }

    #[test]
    fn error_body_converts_to_api_error() {
        let err: ClientError = ErrorBody {
            message: "title: Required".into(),
        }
        .into();
        assert!(matches!(err, ClientError::Api { message } if message == "title: Required"));
    }
}
