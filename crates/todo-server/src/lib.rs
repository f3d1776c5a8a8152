//! # todo-server
//!
//! Axum HTTP server for the TodoMVC API.
//!
//! - REST endpoints: todo CRUD, bulk toggle/delete, health check
//! - Uniform `{status, data}` / `{status, error}` response envelopes
//! - Request tracing via `tower_http::trace` + per-handler spans
//! - Permissive CORS for browser clients
//! - Graceful shutdown via `CancellationToken`

#![deny(unsafe_code)]

pub mod config;
pub mod errors;
pub mod handlers;
pub mod health;
pub mod server;
pub mod shutdown;

pub use config::ServerConfig;
pub use errors::{ApiError, Result};
pub use server::{AppState, TodoServer};
pub use shutdown::ShutdownCoordinator;
