//! # todo-core
//!
//! Shared vocabulary for the TodoMVC workspace.
//!
//! - **Types**: `Task` (persisted row), `Todo` (API projection), and the
//!   request change sets derived from them
//! - **Schema**: request-body validation producing field-path errors
//!   (`title: Required`)
//! - **Envelope**: the `{status, data}` / `{status, error}` JSON wrapper
//!   shared by server responses and client decoding
//! - **IDs and time**: prefixed UUID v7 generation and ISO 8601 timestamps

#![deny(unsafe_code)]

pub mod envelope;
pub mod errors;
pub mod ids;
pub mod schema;
pub mod types;

pub use envelope::{ApiResponse, ErrorBody};
pub use errors::FieldError;
pub use ids::{generate_id, now_iso};
pub use types::{CreateTodo, Task, Todo, TodoList, ToggleTodo, UpdateTodo};
