//! # todo-store
//!
//! `SQLite` persistence for the TodoMVC API.
//!
//! - **Connection pool**: `r2d2` over `rusqlite` with WAL mode, foreign keys,
//!   and performance pragmas applied per connection
//! - **Migrations**: version-tracked SQL embedded at compile time
//! - **Repository**: stateless [`TaskRepo`] — every method takes a
//!   `&Connection` and runs a single statement
//! - **Service**: [`TaskService`] facade owning the pool; acquires one pooled
//!   connection per call

#![deny(unsafe_code)]

pub mod errors;
pub mod service;
pub mod sqlite;

pub use errors::{Result, StoreError};
pub use service::TaskService;
pub use sqlite::connection::{
    new_file, new_in_memory, ConnectionConfig, ConnectionPool, PooledConnection,
};
pub use sqlite::migrations::{current_version, latest_version, run_migrations};
pub use sqlite::repositories::task::TaskRepo;
