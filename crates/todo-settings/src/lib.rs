//! # todo-settings
//!
//! Layered configuration for the todo API.
//!
//! Settings are resolved from three layers (in priority order):
//! 1. **Compiled defaults** — [`TodoSettings::default()`]
//! 2. **User file** — `~/.todomvc/settings.json` (deep-merged over defaults)
//! 3. **Environment variables** — `TODO_*` / `PORT` overrides (highest priority)
//!
//! CLI flags sit above all three; the binary applies them after loading.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{
    apply_env_overrides, data_dir, deep_merge, load_settings, load_settings_from_path,
    settings_path,
};
pub use types::{DatabaseSettings, ServerSettings, TodoSettings};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
