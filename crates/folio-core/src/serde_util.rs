//! Lenient deserializers for payloads that come from more than one producer.
//!
//! The backend emits string ids and naive timestamps; the source-hosting
//! listing emits numeric ids and RFC 3339 timestamps; the backend's video
//! records carry a numeric `view_count` where the page wants a display string.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(u64),
}

/// Accept `"42"` or `42`, producing `"42"`.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

/// Accept a display string (`"25K"`) or a raw count (`25000`), producing the
/// display string.
pub fn display_count<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => compact_count(n),
    })
}

/// Accept RFC 3339 (`2024-01-15T10:30:00Z`) or a naive timestamp
/// (`2024-01-15T10:30:00.123456`), the latter read as UTC.
pub fn flexible_utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_utc(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
}

pub(crate) fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Format a count the way the video cards show it: `999`, `1.2K`, `25K`,
/// `3.4M`. Tenths are truncated, never rounded up.
#[must_use]
pub fn compact_count(n: u64) -> String {
    let (unit, suffix) = if n >= 1_000_000 {
        (1_000_000, "M")
    } else if n >= 1_000 {
        (1_000, "K")
    } else {
        return n.to_string();
    };

    let tenths = n.saturating_mul(10) / unit;
    if tenths % 10 == 0 {
        format!("{}{suffix}", tenths / 10)
    } else {
        format!("{}.{}{suffix}", tenths / 10, tenths % 10)
    }
}
