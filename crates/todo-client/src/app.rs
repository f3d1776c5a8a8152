//! Composite actions: call the API, then fold the response into the store.
//!
//! Each action mirrors a thunk: the HTTP call runs first, and only a
//! successful payload reaches the matching reducer. A failed call surfaces
//! the error and leaves the store untouched.

use todo_core::{CreateTodo, Todo, UpdateTodo};
use tracing::debug;

use crate::client::TodoClient;
use crate::errors::Result;
use crate::store::{Filter, TodoStore};

/// Client-side application state: API client plus the normalized store.
pub struct TodoApp {
    client: TodoClient,
    store: TodoStore,
}

impl TodoApp {
    /// Wrap a client with an empty store.
    #[must_use]
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            store: TodoStore::new(),
        }
    }

    /// Read access to the store and its selectors.
    #[must_use]
    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    /// Create a todo and add it to the store.
    pub async fn create(&mut self, body: &CreateTodo) -> Result<Todo> {
        let todo = self.client.create(body).await?;
        self.store.add_one(todo.clone());
        Ok(todo)
    }

    /// Fetch every todo and merge the result into the store.
    pub async fn list(&mut self) -> Result<Vec<Todo>> {
        let todos = self.client.list().await?;
        debug!(count = todos.len(), "merging fetched todos into store");
        self.store.add_many(todos.clone());
        Ok(todos)
    }

    /// Update one todo and replace its cached entry.
    pub async fn update(&mut self, id: &str, changes: &UpdateTodo) -> Result<Todo> {
        let todo = self.client.update(id, changes).await?;
        self.store.set_one(todo.clone());
        Ok(todo)
    }

    /// Toggle every todo and fold the changed rows back in.
    pub async fn toggle_all(&mut self, completed: Option<bool>) -> Result<Vec<Todo>> {
        let changed = self.client.toggle_all(completed).await?;
        self.store.set_many(changed.clone());
        Ok(changed)
    }

    /// Delete one todo and drop it from the store.
    pub async fn delete(&mut self, id: &str) -> Result<Todo> {
        let todo = self.client.delete(id).await?;
        self.store.remove_one(&todo.id);
        Ok(todo)
    }

    /// Bulk delete by id (or everything when `None`) and drop the deleted
    /// rows from the store.
    pub async fn remove(&mut self, ids: Option<&[String]>) -> Result<Vec<Todo>> {
        let removed = self.client.remove(ids).await?;
        self.store
            .remove_many(removed.iter().map(|todo| todo.id.as_str()));
        Ok(removed)
    }

    /// Delete every completed todo in a single request.
    ///
    /// When nothing is completed this performs no request at all and
    /// returns an empty list.
    pub async fn clear_completed(&mut self) -> Result<Vec<Todo>> {
        let ids: Vec<String> = self
            .store
            .all()
            .into_iter()
            .filter(|todo| todo.completed)
            .map(|todo| todo.id.clone())
            .collect();

        if ids.is_empty() {
            debug!("no completed todos, skipping bulk delete");
            return Ok(Vec::new());
        }

        self.remove(Some(&ids)).await
    }

    /// Switch the store's visibility filter.
    pub fn change_filter(&mut self, filter: Filter) {
        self.store.change_filter(filter);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
