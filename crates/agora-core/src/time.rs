//! Canonical timestamp handling.
//!
//! Every timestamp is written to the store and returned to clients in one
//! textual form: RFC 3339 with microsecond precision and a `Z` designator,
//! e.g. `2025-03-01T09:30:00.123456Z`. Fixed width keeps text ordering in
//! the store identical to chronological ordering.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};

/// Current time truncated to the precision of the canonical form.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Render a timestamp in canonical form.
pub fn canonical(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored timestamp.
///
/// Accepts RFC 3339 (any offset, normalized to UTC) as well as the naive
/// `YYYY-MM-DD HH:MM:SS[.f]` form SQLite's `CURRENT_TIMESTAMP` produces,
/// which is interpreted as UTC. Returns `None` for anything else.
pub fn parse_stored(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}
