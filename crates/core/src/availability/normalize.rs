//! Canonicalization of the date and time representations that reach the
//! engine: ISO timestamps, plain `YYYY-MM-DD` dates, `HH:MM` and `HH:MM:SS`
//! times. Malformed input passes through unchanged rather than failing;
//! storage is trusted to supply well-formed values and the API boundary
//! rejects bad user input before it gets here.

use chrono::{DateTime, NaiveDate, Utc};

/// Canonicalize a date string to `YYYY-MM-DD`.
///
/// ISO timestamps are truncated at the `T` marker; anything else is assumed
/// to already be a plain date and is returned unchanged. Idempotent.
pub fn normalize_date(value: &str) -> String {
    match value.split_once('T') {
        Some((date, _)) => date.to_string(),
        None => value.to_string(),
    }
}

/// The UTC calendar date of a timestamp, formatted `YYYY-MM-DD`.
pub fn calendar_date(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Pad `HH:MM` to `HH:MM:SS` so all times compare on the same width.
/// Already-padded or unrecognized values are returned unchanged.
pub fn normalize_time(value: &str) -> String {
    let colon_parts = value.split(':').count();
    if value.len() == 5 && colon_parts == 2 {
        format!("{value}:00")
    } else {
        value.to_string()
    }
}

/// Fixed-pattern check for `HH:MM` or `HH:MM:SS` with in-range fields.
/// Not a general date-time parser.
pub fn is_valid_time_format(value: &str) -> bool {
    fn field(part: &str, max: u8) -> bool {
        part.len() == 2
            && part.bytes().all(|b| b.is_ascii_digit())
            && part.parse::<u8>().is_ok_and(|v| v <= max)
    }

    match value.split(':').collect::<Vec<_>>().as_slice() {
        [h, m] => field(h, 23) && field(m, 59),
        [h, m, s] => field(h, 23) && field(m, 59) && field(s, 59),
        _ => false,
    }
}

/// Parse a normalized `YYYY-MM-DD` string into a date-only value.
///
/// Parsing date-only (no time component) keeps range comparisons free of
/// time-zone drift from partial timestamps.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
