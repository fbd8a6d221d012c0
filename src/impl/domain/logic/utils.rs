use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parses an ISO-8601 date (`2024-03-05`), naive date-time
/// (`2024-03-05T10:00:00`, optional fraction) or RFC 3339 date-time
/// (`2024-03-05T10:00:00.000Z`). Offsets are normalized to UTC.
pub(crate) fn parse_iso_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Calendar-date part of an ISO string (`2024-03-05T10:00:00Z` → `2024-03-05`).
pub(crate) fn iso_date_part(s: &str) -> &str {
    s.split('T').next().unwrap_or_default()
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
