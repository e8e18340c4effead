//! `HH:MM:SS` timestamp codec.
//!
//! Timestamps are seconds-since-midnight rendered as three colon-separated
//! fields. Hours run 0-23 (one or two digits on input), minutes and seconds
//! 00-59. Hours of 24 or more are rejected outright, never clamped.
//!
//! # Example
//! ```rust,ignore
//! use minutely::timestamp::{is_valid_timestamp, to_seconds, from_seconds};
//!
//! assert!(is_valid_timestamp("00:16:15"));
//! assert_eq!(to_seconds("00:16:15"), 975);
//! assert_eq!(from_seconds(975), "00:16:15");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

static TIMESTAMP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[01]?\d|2[0-3]):[0-5]\d:[0-5]\d$").expect("Invalid timestamp regex"));

/// Check whether `s` (after trimming) is a well-formed `HH:MM:SS` timestamp.
pub fn is_valid_timestamp(s: &str) -> bool {
    TIMESTAMP_RE.is_match(s.trim())
}

/// Largest encodable clock value, 23:59:59.
pub const MAX_CLOCK_SECONDS: u32 = 86_399;

/// Convert a validated `HH:MM:SS` timestamp to seconds since midnight.
///
/// Callers are expected to run [`is_valid_timestamp`] first; fields that do
/// not parse as numbers contribute 0 and oversized fields saturate rather
/// than overflow, so advisory validation can still walk entries whose
/// timestamp already failed format checks.
pub fn to_seconds(s: &str) -> u32 {
    let mut fields = s.trim().split(':');
    let mut next = || {
        fields
            .next()
            .and_then(|f| f.parse::<u32>().ok())
            .unwrap_or(0)
    };
    let hours = next();
    let minutes = next();
    let seconds = next();
    hours
        .saturating_mul(3600)
        .saturating_add(minutes.saturating_mul(60))
        .saturating_add(seconds)
}

/// Render seconds since midnight as a canonical `HH:MM:SS` string,
/// every field zero-padded to two digits.
pub fn from_seconds(total: u32) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Normalize a validated timestamp to its canonical zero-padded form
/// (e.g. `9:05:00` becomes `09:05:00`).
pub fn normalize(s: &str) -> String {
    from_seconds(to_seconds(s))
}
