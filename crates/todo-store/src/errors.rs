//! Error types for the persistence layer.
//!
//! [`StoreError`] is returned by every store operation. Zero rows matched is
//! never an error here — lookups return `Option` and bulk operations return
//! possibly-empty vectors; only infrastructure failures surface as errors.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `SQLite` database error.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Schema migration failed.
    #[error("migration error: {message}")]
    Migration {
        /// Describes which migration failed and why.
        message: String,
    },

    /// Internal invariant violation (e.g. a freshly inserted row missing on
    /// re-read).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for store results.
pub type Result<T> = std::result::Result<T, StoreError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn sqlite_error_display() {
        let err = StoreError::Sqlite(rusqlite::Error::QueryReturnedNoRows);
        assert!(err.to_string().contains("sqlite error"));
    }

    #[test]
    fn migration_error_display() {
        let err = StoreError::Migration {
            message: "v001 failed: table exists".into(),
        };
        assert_eq!(err.to_string(), "migration error: v001 failed: table exists");
    }

    #[test]
    fn internal_error_display() {
        let err = StoreError::Internal("created task task-1 missing on re-read".into());
        assert!(err.to_string().starts_with("internal error"));
    }

    #[test]
    fn from_rusqlite_error() {
        let err: StoreError = rusqlite::Error::QueryReturnedNoRows.into();
        assert_matches!(err, StoreError::Sqlite(_));
    }

    #[test]
    fn result_alias() {
        fn example() -> Result<u32> {
            Ok(7)
        }
        assert_eq!(example().unwrap(), 7);
    }
}
