//! JSON response envelope shared by the server and the client.
//!
//! Every endpoint responds with either
//! `{"status": "success", "data": ...}` or
//! `{"status": "error", "error": {"message": ...}}`.

use serde::{Deserialize, Serialize};

/// The two-armed response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiResponse<T> {
    /// Successful response carrying the endpoint's data.
    Success {
        /// Endpoint-specific payload.
        data: T,
    },
    /// Failed response carrying a message.
    Error {
        /// Error detail.
        error: ErrorBody,
    },
}

/// The `error` object inside a failed envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload in a success envelope.
    pub fn success(data: T) -> Self {
        Self::Success { data }
    }

    /// Build an error envelope from a message.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: ErrorBody {
                message: message.into(),
            },
        }
    }

    /// Unwrap into the payload, or the error message on the error arm.
    ///
    /// # Errors
    ///
    /// Returns the envelope's error message when the response is the error arm.
    pub fn into_result(self) -> Result<T, ErrorBody> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Error { error } => Err(error),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Todo;

    #[test]
    fn success_envelope_shape() {
        let resp = ApiResponse::success(serde_json::json!({"todos": []}));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"], serde_json::json!({"todos": []}));
    }

    #[test]
    fn error_envelope_shape() {
        let resp: ApiResponse<()> = ApiResponse::error("title: Required");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"]["message"], "title: Required");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn decodes_success_with_typed_data() {
        let raw = r#"{"status":"success","data":{"id":"task-1","title":"Hi","completed":false,"order":1}}"#;
        let resp: ApiResponse<Todo> = serde_json::from_str(raw).unwrap();
        let todo = resp.into_result().unwrap();
        assert_eq!(todo.id, "task-1");
        assert_eq!(todo.order, 1);
    }

    #[test]
    fn decodes_error_arm() {
        let raw = r#"{"status":"error","error":{"message":"Not found any todo with id: x"}}"#;
        let resp: ApiResponse<Todo> = serde_json::from_str(raw).unwrap();
        let err = resp.into_result().unwrap_err();
        assert_eq!(err.message, "Not found any todo with id: x");
    }

    #[test]
    fn unknown_status_fails_to_decode() {
        let raw = r#"{"status":"partial","data":{}}"#;
        let result: Result<ApiResponse<serde_json::Value>, _> = serde_json::from_str(raw);
        assert!(result.is_err());
    }
}
