//! SeaORM entities for the `posts`, `comments` and `likes` tables.

pub mod comment;
pub mod like;
pub mod post;

use chrono::{DateTime, Utc};

use agora_core::time;

/// Decode a stored timestamp column.
///
/// Unreadable or missing values are replaced by the current time instead of
/// failing the request; every substitution is logged.
pub(crate) fn stored_timestamp(raw: Option<&str>, column: &'static str) -> DateTime<Utc> {
    match raw.and_then(time::parse_stored) {
        Some(ts) => ts,
        None => {
            tracing::warn!(column, raw = ?raw, "Unreadable stored timestamp, using current time");
            time::now()
        }
    }
}

/// Counters are `NOT NULL DEFAULT 0`; a negative value can only come from
/// outside tampering and is clamped.
pub(crate) fn stored_count(raw: i64) -> u64 {
    u64::try_from(raw).unwrap_or(0)
}
