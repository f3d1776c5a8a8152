//! # todo-client
//!
//! Typed HTTP client for the todo API plus the normalized store a UI
//! would consume.
//!
//! - **Client**: one method per endpoint over `reqwest`, decoding the shared
//!   response envelope into typed payloads
//! - **Store**: insertion-ordered id list + entity map with entity-adapter
//!   reducers (`add`/`set`/`remove`, one and many)
//! - **Selectors**: visible list under the active filter, active/completed
//!   counts
//! - **App**: composite actions that run the HTTP call and fold the payload
//!   into the store

#![deny(unsafe_code)]

pub mod app;
pub mod client;
pub mod errors;
pub mod store;

pub use app::TodoApp;
pub use client::TodoClient;
pub use errors::{ClientError, Result};
pub use store::{Filter, TodoStore};
