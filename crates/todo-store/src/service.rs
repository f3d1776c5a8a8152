//! High-level `TaskService` API.
//!
//! Wraps a connection pool and exposes the task operations the HTTP layer
//! needs. Each method checks out one pooled connection; `create_one` runs its
//! insert-and-reload pair inside a single transaction so callers never
//! observe the row half-written.

use todo_core::types::{CreateTodo, Task, UpdateTodo};
use tracing::debug;

use crate::errors::Result;
use crate::sqlite::connection::{ConnectionPool, PooledConnection};
use crate::sqlite::repositories::task::TaskRepo;

/// Pool-backed task service.
pub struct TaskService {
    pool: ConnectionPool,
}

impl TaskService {
    /// Create a new `TaskService` with the given connection pool.
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    /// Get a connection from the pool.
    fn conn(&self) -> Result<PooledConnection> {
        Ok(self.pool.get()?)
    }

    /// Create a task and return the stored row.
    pub fn create_one(&self, fields: &CreateTodo) -> Result<Task> {
        let conn = self.conn()?;
        let tx = conn.unchecked_transaction()?;
        let task = TaskRepo::create(&tx, fields)?;
        tx.commit()?;
        debug!(id = %task.id, "task created");
        Ok(task)
    }

    /// List every task, oldest first.
    pub fn list_all(&self) -> Result<Vec<Task>> {
        let conn = self.conn()?;
        let tasks = TaskRepo::list(&conn)?;
        debug!(count = tasks.len(), "tasks listed");
        Ok(tasks)
    }

    /// Get a task by ID.
    pub fn get_one(&self, id: &str) -> Result<Option<Task>> {
        let conn = self.conn()?;
        TaskRepo::get(&conn, id)
    }

    /// Apply a change set to a task.
    ///
    /// `None` means zero rows matched: the id is unknown, or every supplied
    /// value already equals the stored one.
    pub fn update_one(&self, id: &str, changes: &UpdateTodo) -> Result<Option<Task>> {
        let conn = self.conn()?;
        let task = TaskRepo::update(&conn, id, changes)?;
        debug!(id, matched = task.is_some(), "task update applied");
        Ok(task)
    }

    /// Delete a task by ID, returning the deleted row.
    pub fn remove_one(&self, id: &str) -> Result<Option<Task>> {
        let conn = self.conn()?;
        let task = TaskRepo::delete(&conn, id)?;
        debug!(id, matched = task.is_some(), "task delete applied");
        Ok(task)
    }

    /// Toggle completion across the table; see [`TaskRepo::toggle_all`].
    pub fn toggle_all(&self, completed: Option<bool>) -> Result<Vec<Task>> {
        let conn = self.conn()?;
        let tasks = TaskRepo::toggle_all(&conn, completed)?;
        debug!(affected = tasks.len(), ?completed, "toggle applied");
        Ok(tasks)
    }

    /// Delete all tasks, or only the supplied IDs; see [`TaskRepo::remove_all`].
    pub fn remove_all(&self, ids: Option<&[String]>) -> Result<Vec<Task>> {
        let conn = self.conn()?;
        let tasks = TaskRepo::remove_all(&conn, ids)?;
        debug!(deleted = tasks.len(), "bulk delete applied");
        Ok(tasks)
    }

    /// Probe the database with a trivial query.
    ///
    /// Returns the literal `"up"` selected through the connection, so a
    /// successful call proves a connection could be checked out and queried.
    pub fn ping(&self) -> Result<String> {
        let conn = self.conn()?;
        let status = conn.query_row("SELECT 'up' AS status", [], |row| row.get(0))?;
        Ok(status)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
