//! ID and timestamp generation.
//!
//! Task IDs are prefixed UUID v7 strings (`task-...`), time-ordered so that
//! freshly created rows sort after older ones. Timestamps are ISO 8601 UTC
//! with millisecond precision, matching the precision of the persisted
//! `created_at`/`updated_at` columns.

use uuid::Uuid;

/// Generate a prefixed UUID v7 ID.
#[must_use]
pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::now_v7())
}

/// Get the current UTC timestamp as an ISO 8601 string (millisecond precision).
#[must_use]
pub fn now_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
