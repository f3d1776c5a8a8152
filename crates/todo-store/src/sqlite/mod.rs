//! `SQLite` backend for the task store.
//!
//! - **[`connection`]**: `r2d2` connection pool with WAL mode, foreign keys,
//!   and performance pragmas applied to every connection.
//! - **[`migrations`]**: Version-tracked schema evolution, embedded at
//!   compile time and run transactionally.
//! - **[`repositories`]**: Stateless repository structs — each method takes
//!   `&Connection` and executes a single statement.

pub mod connection;
pub mod migrations;
pub mod repositories;

pub use connection::{
    new_file, new_in_memory, verify_pragmas, ConnectionConfig, ConnectionPool, PooledConnection,
    PragmaState,
};
pub use migrations::{current_version, latest_version, run_migrations};
