//! Request-body validation.
//!
//! Handlers receive raw JSON and run it through one of the `parse_*`
//! functions here, getting back either the typed request shape or a
//! [`FieldError`] naming the first failing field in canonical order
//! (title, completed, order). Unknown fields are ignored. `title` is
//! trimmed during parsing, so downstream code only ever sees the stored
//! form.

use serde_json::{Map, Value};

use crate::errors::FieldError;
use crate::types::{CreateTodo, ToggleTodo, UpdateTodo};

/// Validate the body of `POST /todo`.
///
/// # Errors
///
/// Returns a [`FieldError`] when the body is not an object, `title` is
/// missing, empty after trimming, or mistyped, or `order` is supplied but
/// not a positive integer.
pub fn parse_create(body: &Value) -> Result<CreateTodo, FieldError> {
    let obj = require_object(body)?;
    let title = require_title(obj)?;
    let order = optional_order(obj)?;
    Ok(CreateTodo { title, order })
}

/// Validate the body of `PUT /todo/{id}`.
///
/// All fields are optional; supplied fields must still be well-formed.
///
/// # Errors
///
/// Returns a [`FieldError`] for the first malformed supplied field.
pub fn parse_update(body: &Value) -> Result<UpdateTodo, FieldError> {
    let obj = require_object(body)?;
    let title = optional_title(obj)?;
    let completed = optional_completed(obj)?;
    let order = optional_order(obj)?;
    Ok(UpdateTodo {
        title,
        completed,
        order,
    })
}

/// Validate the body of `PATCH /todo`.
///
/// # Errors
///
/// Returns a [`FieldError`] when `completed` is supplied but not a boolean.
pub fn parse_toggle(body: &Value) -> Result<ToggleTodo, FieldError> {
    let obj = require_object(body)?;
    let completed = optional_completed(obj)?;
    Ok(ToggleTodo { completed })
}

// ─────────────────────────────────────────────────────────────────────────────
// Field validators
// ─────────────────────────────────────────────────────────────────────────────

fn require_object(body: &Value) -> Result<&Map<String, Value>, FieldError> {
    body.as_object()
        .ok_or_else(|| FieldError::expected("body", "object", json_type_name(body)))
}

fn require_title(obj: &Map<String, Value>) -> Result<String, FieldError> {
    match obj.get("title") {
        None => Err(FieldError::required("title")),
        Some(value) => parse_title(value),
    }
}

fn optional_title(obj: &Map<String, Value>) -> Result<Option<String>, FieldError> {
    obj.get("title").map(parse_title).transpose()
}

fn parse_title(value: &Value) -> Result<String, FieldError> {
    let Value::String(raw) = value else {
        return Err(FieldError::expected(
            "title",
            "string",
            json_type_name(value),
        ));
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(
            "title",
            "String must contain at least 1 character(s)",
        ));
    }
    Ok(trimmed.to_owned())
}

fn optional_completed(obj: &Map<String, Value>) -> Result<Option<bool>, FieldError> {
    match obj.get("completed") {
        None => Ok(None),
        Some(Value::Bool(flag)) => Ok(Some(*flag)),
        Some(other) => Err(FieldError::expected(
            "completed",
            "boolean",
            json_type_name(other),
        )),
    }
}

fn optional_order(obj: &Map<String, Value>) -> Result<Option<i64>, FieldError> {
    match obj.get("order") {
        None => Ok(None),
        Some(Value::Number(n)) => {
            let Some(order) = n.as_i64() else {
                return Err(FieldError::new("order", "Expected integer, received float"));
            };
            if order <= 0 {
                return Err(FieldError::new("order", "Number must be greater than 0"));
            }
            Ok(Some(order))
        }
        Some(other) => Err(FieldError::expected(
            "order",
            "number",
            json_type_name(other),
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── parse_create ──

    #[test]
    fn create_with_title_only() {
        let parsed = parse_create(&json!({"title": "Make a sandwich"})).unwrap();
        assert_eq!(parsed.title, "Make a sandwich");
        assert_eq!(parsed.order, None);
    }

    #[test]
    fn create_with_explicit_order() {
        let parsed = parse_create(&json!({"title": "Buy milk", "order": 7})).unwrap();
        assert_eq!(parsed.order, Some(7));
    }

    #[test]
    fn create_trims_title() {
        let parsed = parse_create(&json!({"title": "  padded  "})).unwrap();
        assert_eq!(parsed.title, "padded");
    }

    #[test]
    fn create_missing_title_is_required() {
        let err = parse_create(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), "title: Required");
    }

    #[test]
    fn create_null_title_is_type_error() {
        let err = parse_create(&json!({"title": null})).unwrap_err();
        assert_eq!(err.to_string(), "title: Expected string, received null");
    }

    #[test]
    fn create_numeric_title_is_type_error() {
        let err = parse_create(&json!({"title": 42})).unwrap_err();
        assert_eq!(err.to_string(), "title: Expected string, received number");
    }

    #[test]
    fn create_blank_title_rejected() {
        let err = parse_create(&json!({"title": "   "})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "title: String must contain at least 1 character(s)"
        );
    }

    #[test]
    fn create_zero_order_rejected() {
        let err = parse_create(&json!({"title": "x", "order": 0})).unwrap_err();
        assert_eq!(err.to_string(), "order: Number must be greater than 0");
    }

    #[test]
    fn create_negative_order_rejected() {
        let err = parse_create(&json!({"title": "x", "order": -3})).unwrap_err();
        assert_eq!(err.to_string(), "order: Number must be greater than 0");
    }

    #[test]
    fn create_float_order_rejected() {
        let err = parse_create(&json!({"title": "x", "order": 1.5})).unwrap_err();
        assert_eq!(err.to_string(), "order: Expected integer, received float");
    }

    #[test]
    fn create_non_object_body_rejected() {
        let err = parse_create(&json!([1, 2])).unwrap_err();
        assert_eq!(err.to_string(), "body: Expected object, received array");
    }

    #[test]
    fn create_ignores_unknown_fields() {
        let parsed = parse_create(&json!({"title": "x", "bogus": true})).unwrap();
        assert_eq!(parsed.title, "x");
    }

    // ── parse_update ──

    #[test]
    fn update_empty_object_is_empty_change_set() {
        let parsed = parse_update(&json!({})).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn update_accepts_partial_fields() {
        let parsed = parse_update(&json!({"completed": true})).unwrap();
        assert_eq!(parsed.completed, Some(true));
        assert_eq!(parsed.title, None);
        assert_eq!(parsed.order, None);
    }

    #[test]
    fn update_all_fields() {
        let parsed =
            parse_update(&json!({"title": "New", "completed": false, "order": 2})).unwrap();
        assert_eq!(parsed.title.as_deref(), Some("New"));
        assert_eq!(parsed.completed, Some(false));
        assert_eq!(parsed.order, Some(2));
    }

    #[test]
    fn update_blank_title_rejected() {
        let err = parse_update(&json!({"title": ""})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "title: String must contain at least 1 character(s)"
        );
    }

    #[test]
    fn update_string_completed_rejected() {
        let err = parse_update(&json!({"completed": "yes"})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "completed: Expected boolean, received string"
        );
    }

    #[test]
    fn update_reports_first_failing_field_in_canonical_order() {
        let err = parse_update(&json!({"title": 5, "order": -1})).unwrap_err();
        assert_eq!(err.path, "title");
    }

    // ── parse_toggle ──

    #[test]
    fn toggle_with_target_state() {
        let parsed = parse_toggle(&json!({"completed": true})).unwrap();
        assert_eq!(parsed.completed, Some(true));
    }

    #[test]
    fn toggle_without_body_fields_inverts() {
        let parsed = parse_toggle(&json!({})).unwrap();
        assert_eq!(parsed.completed, None);
    }

    #[test]
    fn toggle_non_boolean_rejected() {
        let err = parse_toggle(&json!({"completed": 1})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "completed: Expected boolean, received number"
        );
    }
}
