//! Task domain types and the request shapes derived from them.
//!
//! `Task` is the canonical persisted shape; everything else is a structural
//! derivation of it: `Todo` drops the server timestamps, `CreateTodo` picks
//! `title` plus an optional `order`, `UpdateTodo` makes every mutable column
//! optional, `ToggleTodo` carries the optional target state for a bulk flip.

use serde::{Deserialize, Serialize};

/// A persisted task row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Server-generated opaque ID (`task-<uuid>`), immutable.
    pub id: String,
    /// Non-empty trimmed title.
    pub title: String,
    /// Completion flag, defaults to false.
    pub completed: bool,
    /// Positive display order, server-assigned when omitted at creation.
    pub order: i64,
    /// Creation timestamp (ISO 8601 UTC).
    pub created_at: String,
    /// Last-modification timestamp (ISO 8601 UTC).
    pub updated_at: String,
}

impl Task {
    /// Project this row into its API-facing [`Todo`] shape.
    #[must_use]
    pub fn into_todo(self) -> Todo {
        Todo {
            id: self.id,
            title: self.title,
            completed: self.completed,
            order: self.order,
        }
    }
}

/// API-facing projection of a [`Task`]: the row minus server timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Server-generated opaque ID.
    pub id: String,
    /// Non-empty trimmed title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Positive display order.
    pub order: i64,
}

/// Body of `POST /todo`: a title plus an optional explicit order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodo {
    /// Non-empty trimmed title.
    pub title: String,
    /// Explicit order; the server assigns the next sequence value when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

/// Body of `PUT /todo/{id}`: the typed change set.
///
/// Every field is optional; only supplied fields are written, and the column
/// list is fixed here rather than derived from request keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodo {
    /// New title, trimmed and non-empty when supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New completion flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// New display order, positive when supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl UpdateTodo {
    /// True when no field is supplied (a no-op change set).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none() && self.order.is_none()
    }
}

/// Body of `PATCH /todo`: the optional target state for a bulk toggle.
///
/// `Some(state)` flips only rows that differ from `state`; `None` inverts
/// every row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleTodo {
    /// Target completion state, or `None` to invert all rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Payload of the collection-shaped endpoints (`{"todos": [...]}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// The todos in the payload.
    pub todos: Vec<Todo>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
