//! Handlers for the `/todo` endpoints.
//!
//! Every handler returns the shared envelope: payloads under
//! `{"status":"success","data":...}`, failures through [`ApiError`]. Bodies
//! arrive as raw JSON and go through the schema parsers so validation
//! failures carry the field path (`title: Required`).

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use axum_extra::extract::Query;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use todo_core::envelope::ApiResponse;
use todo_core::schema::{parse_create, parse_toggle, parse_update};
use todo_core::types::{Task, Todo, TodoList};

use crate::errors::ApiError;
use crate::server::AppState;

/// `POST /todo` — create a todo.
#[instrument(skip_all, fields(endpoint = "todo.create"))]
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiResponse<Todo>>, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::MalformedBody)?;
    let fields = parse_create(&body)?;
    let task = state.tasks.create_one(&fields)?;
    Ok(Json(ApiResponse::success(task.into_todo())))
}

/// `GET /todo` — list every todo, oldest first.
#[instrument(skip_all, fields(endpoint = "todo.list"))]
pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<TodoList>>, ApiError> {
    let todos = state
        .tasks
        .list_all()?
        .into_iter()
        .map(Task::into_todo)
        .collect();
    Ok(Json(ApiResponse::success(TodoList { todos })))
}

/// `GET /todo/{id}` — fetch one todo.
#[instrument(skip_all, fields(endpoint = "todo.get", id = %id))]
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Todo>>, ApiError> {
    let task = state
        .tasks
        .get_one(&id)?
        .ok_or_else(|| ApiError::not_found(&id))?;
    Ok(Json(ApiResponse::success(task.into_todo())))
}

/// `PUT /todo/{id}` — apply a change set to one todo.
///
/// The row is read before updating so a missing ID is a 404 even when the
/// change set is empty. A change set matching the stored values updates
/// zero rows; the response then carries the current row unchanged.
#[instrument(skip_all, fields(endpoint = "todo.update", id = %id))]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiResponse<Todo>>, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::MalformedBody)?;
    let changes = parse_update(&body)?;
    let current = state
        .tasks
        .get_one(&id)?
        .ok_or_else(|| ApiError::not_found(&id))?;
    let task = state.tasks.update_one(&id, &changes)?.unwrap_or(current);
    Ok(Json(ApiResponse::success(task.into_todo())))
}

/// `DELETE /todo/{id}` — delete one todo, responding with the deleted row.
#[instrument(skip_all, fields(endpoint = "todo.delete", id = %id))]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Todo>>, ApiError> {
    let task = state
        .tasks
        .remove_one(&id)?
        .ok_or_else(|| ApiError::not_found(&id))?;
    Ok(Json(ApiResponse::success(task.into_todo())))
}

/// `PATCH /todo` — toggle completion across the collection.
///
/// `{"completed": c}` sets every row to `c`; `{}` inverts every row. The
/// response lists only the rows that actually changed.
#[instrument(skip_all, fields(endpoint = "todo.toggleAll"))]
pub async fn toggle_todos(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiResponse<TodoList>>, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::MalformedBody)?;
    let toggle = parse_toggle(&body)?;
    let todos = state
        .tasks
        .toggle_all(toggle.completed)?
        .into_iter()
        .map(Task::into_todo)
        .collect();
    Ok(Json(ApiResponse::success(TodoList { todos })))
}

/// Query shape of `DELETE /todo`: ids under a plain repeated key, with the
/// bracketed form accepted for clients that serialize arrays that way.
#[derive(Debug, Default, Deserialize)]
pub struct RemoveTodosQuery {
    /// `ids=a&ids=b`
    #[serde(default)]
    ids: Option<Vec<String>>,
    /// `ids[]=a&ids[]=b`
    #[serde(rename = "ids[]", default)]
    ids_bracketed: Option<Vec<String>>,
}

impl RemoveTodosQuery {
    /// Collapse both accepted keys into one optional ID set.
    fn into_ids(self) -> Option<Vec<String>> {
        match (self.ids, self.ids_bracketed) {
            (None, None) => None,
            (plain, bracketed) => {
                let mut ids = plain.unwrap_or_default();
                ids.extend(bracketed.unwrap_or_default());
                Some(ids)
            }
        }
    }
}

/// `DELETE /todo` — bulk delete, responding with the deleted rows.
///
/// Without a query the whole table is cleared; with `ids` exactly those
/// rows go. An explicitly empty ID set deletes nothing.
#[instrument(skip_all, fields(endpoint = "todo.removeAll"))]
pub async fn remove_todos(
    State(state): State<AppState>,
    Query(query): Query<RemoveTodosQuery>,
) -> Result<Json<ApiResponse<TodoList>>, ApiError> {
    let ids = query.into_ids();
    let todos = state
        .tasks
        .remove_all(ids.as_deref())?
        .into_iter()
        .map(Task::into_todo)
        .collect();
    Ok(Json(ApiResponse::success(TodoList { todos })))
}
