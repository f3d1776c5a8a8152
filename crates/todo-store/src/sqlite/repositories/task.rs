//! Task repository — single-statement CRUD over the `tasks` table.
//!
//! Mutating operations use `RETURNING *` so each call is one atomic
//! statement: the update guard, the bulk toggle, and the bulk delete all
//! report exactly the rows they touched without a second round trip.

use rusqlite::{params, Connection, OptionalExtension};

use todo_core::ids::{generate_id, now_iso};
use todo_core::types::{CreateTodo, Task, UpdateTodo};

use crate::errors::{Result, StoreError};

/// Task repository for SQL CRUD operations.
pub struct TaskRepo;

impl TaskRepo {
    /// Create a new task.
    ///
    /// Only supplied columns are listed in the INSERT: `completed` falls back
    /// to the column default, and an omitted `order` is assigned
    /// `COALESCE(MAX("order"), 0) + 1` inline.
    pub fn create(conn: &Connection, fields: &CreateTodo) -> Result<Task> {
        let id = generate_id("task");
        let now = now_iso();

        match fields.order {
            Some(order) => {
                let _ = conn.execute(
                    "INSERT INTO tasks (id, title, \"order\", created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?4)",
                    params![id, fields.title, order, now],
                )?;
            }
            None => {
                let _ = conn.execute(
                    "INSERT INTO tasks (id, title, \"order\", created_at, updated_at)
                     VALUES (?1, ?2, (SELECT COALESCE(MAX(\"order\"), 0) + 1 FROM tasks), ?3, ?3)",
                    params![id, fields.title, now],
                )?;
            }
        }

        Self::get(conn, &id)?
            .ok_or_else(|| StoreError::Internal(format!("created task {id} missing on re-read")))
    }

    /// Get a task by ID.
    pub fn get(conn: &Connection, id: &str) -> Result<Option<Task>> {
        let task = conn
            .query_row("SELECT * FROM tasks WHERE id = ?1", params![id], Self::map_row)
            .optional()?;
        Ok(task)
    }

    /// List all tasks, oldest first.
    pub fn list(conn: &Connection) -> Result<Vec<Task>> {
        let mut stmt = conn.prepare("SELECT * FROM tasks ORDER BY created_at ASC, id ASC")?;
        let tasks = stmt
            .query_map([], Self::map_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    /// Update a task with the supplied change set.
    ///
    /// The UPDATE touches only supplied columns plus `updated_at`, guarded by
    /// `WHERE id = ? AND (<col> IS NOT <new>, OR ...)` so that a no-op change
    /// set matching current values affects zero rows instead of bumping
    /// `updated_at` spuriously. Returns `None` when zero rows matched (either
    /// the id does not exist or every supplied value already matched); an
    /// empty change set returns the current row unchanged.
    pub fn update(conn: &Connection, id: &str, changes: &UpdateTodo) -> Result<Option<Task>> {
        if changes.is_empty() {
            return Self::get(conn, id);
        }

        let mut sets: Vec<String> = Vec::new();
        let mut guards: Vec<String> = Vec::new();
        let mut values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(ref title) = changes.title {
            values.push(Box::new(title.clone()));
            let n = values.len();
            sets.push(format!("title = ?{n}"));
            guards.push(format!("title IS NOT ?{n}"));
        }
        if let Some(completed) = changes.completed {
            values.push(Box::new(completed));
            let n = values.len();
            sets.push(format!("completed = ?{n}"));
            guards.push(format!("completed IS NOT ?{n}"));
        }
        if let Some(order) = changes.order {
            values.push(Box::new(order));
            let n = values.len();
            sets.push(format!("\"order\" = ?{n}"));
            guards.push(format!("\"order\" IS NOT ?{n}"));
        }

        values.push(Box::new(now_iso()));
        sets.push(format!("updated_at = ?{}", values.len()));

        values.push(Box::new(id.to_owned()));
        let sql = format!(
            "UPDATE tasks SET {} WHERE id = ?{} AND ({}) RETURNING *",
            sets.join(", "),
            values.len(),
            guards.join(" OR "),
        );

        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            values.iter().map(AsRef::as_ref).collect();
        let task = conn
            .query_row(&sql, params_refs.as_slice(), Self::map_row)
            .optional()?;
        Ok(task)
    }

    /// Delete a task by ID, returning the deleted row.
    pub fn delete(conn: &Connection, id: &str) -> Result<Option<Task>> {
        let task = conn
            .query_row(
                "DELETE FROM tasks WHERE id = ?1 RETURNING *",
                params![id],
                Self::map_row,
            )
            .optional()?;
        Ok(task)
    }

    /// Toggle completion across the table.
    ///
    /// With a target state, flips only rows whose `completed` differs from
    /// it; without one, inverts every row. Affected rows get a fresh
    /// `updated_at` and are returned oldest first (possibly empty).
    pub fn toggle_all(conn: &Connection, completed: Option<bool>) -> Result<Vec<Task>> {
        let now = now_iso();
        let mut tasks: Vec<Task> = match completed {
            Some(target) => {
                let mut stmt = conn.prepare(
                    "UPDATE tasks SET completed = ?1, updated_at = ?2
                     WHERE completed IS NOT ?1
                     RETURNING *",
                )?;
                stmt.query_map(params![target, now], Self::map_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?
            }
            None => {
                let mut stmt = conn.prepare(
                    "UPDATE tasks SET completed = NOT completed, updated_at = ?1 RETURNING *",
                )?;
                stmt.query_map(params![now], Self::map_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?
            }
        };
        sort_oldest_first(&mut tasks);
        Ok(tasks)
    }

    /// Delete all tasks, or only those whose ID is in the supplied set.
    ///
    /// Returns the deleted rows oldest first. An explicit empty set deletes
    /// nothing.
    pub fn remove_all(conn: &Connection, ids: Option<&[String]>) -> Result<Vec<Task>> {
        let mut tasks: Vec<Task> = match ids {
            None => {
                let mut stmt = conn.prepare("DELETE FROM tasks RETURNING *")?;
                stmt.query_map([], Self::map_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?
            }
            Some([]) => Vec::new(),
            Some(ids) => {
                let placeholders: Vec<String> =
                    (1..=ids.len()).map(|i| format!("?{i}")).collect();
                let sql = format!(
                    "DELETE FROM tasks WHERE id IN ({}) RETURNING *",
                    placeholders.join(", ")
                );
                let params_refs: Vec<&dyn rusqlite::types::ToSql> = ids
                    .iter()
                    .map(|id| id as &dyn rusqlite::types::ToSql)
                    .collect();
                let mut stmt = conn.prepare(&sql)?;
                stmt.query_map(params_refs.as_slice(), Self::map_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?
            }
        };
        sort_oldest_first(&mut tasks);
        Ok(tasks)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get("id")?,
            title: row.get("title")?,
            completed: row.get("completed")?,
            order: row.get("order")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

/// `RETURNING` emits rows in storage order; re-sort to match list order.
fn sort_oldest_first(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
