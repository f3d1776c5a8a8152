//! Normalized todo store: insertion-ordered id list + entity map + filter.
//!
//! Reducers mirror an entity adapter: `add_*` ignores ids already present,
//! `set_*` inserts or replaces, `remove_*` drops. The store is a cache of
//! server state, repopulated from API responses.

use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use todo_core::Todo;

/// Visibility filter applied by [`TodoStore::visible`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    /// Show every todo.
    #[default]
    All,
    /// Show only todos not yet completed.
    Active,
    /// Show only completed todos.
    Completed,
}

impl FromStr for Filter {
    type Err = Infallible;

    /// Parse `all`/`active`/`completed`; anything else falls back to `All`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "active" => Self::Active,
            "completed" => Self::Completed,
            _ => Self::All,
        })
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        };
        write!(f, "{name}")
    }
}

/// Normalized client-side cache of server todos.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    ids: Vec<String>,
    entities: HashMap<String, Todo>,
    filter: Filter,
}

impl TodoStore {
    /// Create an empty store with the `All` filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── reducers ──

    /// Insert a todo unless its id is already present.
    pub fn add_one(&mut self, todo: Todo) {
        if self.entities.contains_key(&todo.id) {
            return;
        }
        self.ids.push(todo.id.clone());
        let _ = self.entities.insert(todo.id.clone(), todo);
    }

    /// [`add_one`](Self::add_one) for each todo; existing entries not in the
    /// payload are kept.
    pub fn add_many(&mut self, todos: impl IntoIterator<Item = Todo>) {
        for todo in todos {
            self.add_one(todo);
        }
    }

    /// Insert or replace one todo. A replaced todo keeps its position.
    pub fn set_one(&mut self, todo: Todo) {
        if !self.entities.contains_key(&todo.id) {
            self.ids.push(todo.id.clone());
        }
        let _ = self.entities.insert(todo.id.clone(), todo);
    }

    /// [`set_one`](Self::set_one) for each todo.
    pub fn set_many(&mut self, todos: impl IntoIterator<Item = Todo>) {
        for todo in todos {
            self.set_one(todo);
        }
    }

    /// Drop one todo by id; absent ids are a no-op.
    pub fn remove_one(&mut self, id: &str) {
        if self.entities.remove(id).is_some() {
            self.ids.retain(|existing| existing != id);
        }
    }

    /// [`remove_one`](Self::remove_one) for each id.
    pub fn remove_many<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        for id in ids {
            self.remove_one(id);
        }
    }

    /// Switch the visibility filter.
    pub fn change_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    // ── selectors ──

    /// The active visibility filter.
    #[must_use]
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Look up one todo by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.entities.get(id)
    }

    /// Every todo in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<&Todo> {
        self.ids
            .iter()
            .filter_map(|id| self.entities.get(id))
            .collect()
    }

    /// Todos passing the active filter, in insertion order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Todo> {
        self.all()
            .into_iter()
            .filter(|todo| match self.filter {
                Filter::All => true,
                Filter::Active => !todo.completed,
                Filter::Completed => todo.completed,
            })
            .collect()
    }

    /// Total number of todos.
    #[must_use]
    pub fn all_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of todos not yet completed.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.entities.values().filter(|todo| !todo.completed).count()
    }

    /// Number of completed todos.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.all_count() - self.active_count()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
