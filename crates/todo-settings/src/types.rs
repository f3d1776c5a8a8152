//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` to match the JSON
//! settings file, and `#[serde(default)]` so partial files work — missing
//! fields get their compiled default during deserialization.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root settings for the todo API.
///
/// Loaded from `~/.todomvc/settings.json` with defaults applied for missing
/// fields; environment variables and CLI flags can override specific values.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TodoSettings {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// SQLite database settings.
    pub database: DatabaseSettings,
}

/// HTTP server network settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerSettings {
    /// Bind address.
    pub host: String,
    /// Listen port.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3333,
        }
    }
}

/// SQLite database settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatabaseSettings {
    /// Database file path. Relative paths resolve under `~/.todomvc`.
    pub path: String,
    /// Maximum connections in the pool.
    pub pool_size: u32,
    /// `SQLite` busy timeout in milliseconds.
    pub busy_timeout_ms: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "todos.db".to_string(),
            pool_size: 16,
            busy_timeout_ms: 30_000,
        }
    }
}

impl DatabaseSettings {
    /// Resolve the database path, joining relative paths onto the data dir.
    pub fn resolved_path(&self) -> PathBuf {
        let path = PathBuf::from(&self.path);
        if path.is_absolute() {
            path
        } else {
            crate::loader::data_dir().join(path)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let settings: TodoSettings =
            serde_json::from_str(r#"{"server": {"port": 9090}}"#).unwrap();
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.database.pool_size, 16);
    }

    #[test]
    fn camel_case_field_names() {
        let settings: TodoSettings = serde_json::from_str(
            r#"{"database": {"poolSize": 4, "busyTimeoutMs": 5000}}"#,
        )
        .unwrap();
        assert_eq!(settings.database.pool_size, 4);
        assert_eq!(settings.database.busy_timeout_ms, 5000);

        let json = serde_json::to_value(&settings).unwrap();
        assert!(json["database"]["poolSize"].is_number());
        assert!(json["database"]["busyTimeoutMs"].is_number());
    }

    #[test]
    fn absolute_path_kept_as_is() {
        let db = DatabaseSettings {
            path: "/tmp/elsewhere.db".to_string(),
            ..DatabaseSettings::default()
        };
        assert_eq!(db.resolved_path(), PathBuf::from("/tmp/elsewhere.db"));
    }

    #[test]
    fn relative_path_joined_onto_data_dir() {
        let db = DatabaseSettings::default();
        let resolved = db.resolved_path();
        assert!(resolved.ends_with(".todomvc/todos.db"));
    }
}
