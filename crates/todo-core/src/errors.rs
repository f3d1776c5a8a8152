//! Field-level validation errors.

use thiserror::Error;

/// A single request-validation failure, pointing at the offending field.
///
/// Renders as `<path>: <reason>`, e.g. `title: Required`. The reason strings
/// match the wire format the frontend already parses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {reason}")]
pub struct FieldError {
    /// Path of the failing field (`title`, `order`, ...).
    pub path: String,
    /// Human-readable reason.
    pub reason: String,
}

impl FieldError {
    /// Build an error for a field with the given reason.
    #[must_use]
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// A required field was absent.
    #[must_use]
    pub fn required(path: &str) -> Self {
        Self::new(path, "Required")
    }

    /// A field had the wrong JSON type.
    #[must_use]
    pub fn expected(path: &str, expected: &str, received: &str) -> Self {
        Self::new(path, format!("Expected {expected}, received {received}"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
