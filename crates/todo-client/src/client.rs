//! Typed HTTP client for the todo API.
//!
//! One method per endpoint. Every response is decoded through the shared
//! envelope: the error arm becomes [`ClientError::Api`], transport and
//! decode failures become [`ClientError::Http`].

use todo_core::{ApiResponse, CreateTodo, Todo, TodoList, ToggleTodo, UpdateTodo};

use crate::errors::{ClientError, Result};

/// Client for the todo API at a fixed base URL.
pub struct TodoClient {
    base_url: String,
    http: reqwest::Client,
}

impl TodoClient {
    /// Create a client for the API at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a client sharing an existing HTTP client.
    #[must_use]
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            let _ = base_url.pop();
        }
        Self { base_url, http }
    }

    /// `POST /todo` — create a todo.
    pub async fn create(&self, body: &CreateTodo) -> Result<Todo> {
        let resp = self
            .http
            .post(format!("{}/todo", self.base_url))
            .json(body)
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// `GET /todo` — fetch every todo.
    ///
    /// Dropping the returned future cancels the request in flight.
    pub async fn list(&self) -> Result<Vec<Todo>> {
        let resp = self
            .http
            .get(format!("{}/todo", self.base_url))
            .send()
            .await?;
        let list: TodoList = Self::decode(resp).await?;
        Ok(list.todos)
    }

    /// `GET /todo/{id}` — fetch one todo.
    pub async fn get(&self, id: &str) -> Result<Todo> {
        let resp = self
            .http
            .get(format!("{}/todo/{id}", self.base_url))
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// `PUT /todo/{id}` — apply a change set to one todo.
    pub async fn update(&self, id: &str, changes: &UpdateTodo) -> Result<Todo> {
        let resp = self
            .http
            .put(format!("{}/todo/{id}", self.base_url))
            .json(changes)
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// `DELETE /todo/{id}` — delete one todo, returning the deleted row.
    pub async fn delete(&self, id: &str) -> Result<Todo> {
        let resp = self
            .http
            .delete(format!("{}/todo/{id}", self.base_url))
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// `PATCH /todo` — set every todo to `completed`, or invert each row
    /// when `None`. Returns the rows that changed.
    pub async fn toggle_all(&self, completed: Option<bool>) -> Result<Vec<Todo>> {
        let resp = self
            .http
            .patch(format!("{}/todo", self.base_url))
            .json(&ToggleTodo { completed })
            .send()
            .await?;
        let list: TodoList = Self::decode(resp).await?;
        Ok(list.todos)
    }

    /// `DELETE /todo` — delete the given ids, or every todo when `None`.
    ///
    /// Ids are serialized as a repeated `ids` query key; `None` sends no
    /// query string at all.
    pub async fn remove(&self, ids: Option<&[String]>) -> Result<Vec<Todo>> {
        let mut req = self.http.delete(format!("{}/todo", self.base_url));
        if let Some(ids) = ids {
            let pairs: Vec<(&str, &str)> =
                ids.iter().map(|id| ("ids", id.as_str())).collect();
            req = req.query(&pairs);
        }
        let resp = req.send().await?;
        let list: TodoList = Self::decode(resp).await?;
        Ok(list.todos)
    }

    /// `GET /health` — the API's own dependency report.
    pub async fn health(&self) -> Result<serde_json::Value> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// Decode a response envelope, regardless of HTTP status.
    ///
    /// Error statuses still carry a well-formed envelope, so the body is
    /// authoritative and the status line is ignored.
    async fn decode<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        let envelope: ApiResponse<T> = resp.json().await?;
        envelope.into_result().map_err(ClientError::from)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
