//! Advisory validation over parsed transcript entries.
//!
//! Nothing in this module raises errors: every function returns a
//! [`ValidationResult`] (or a bool for the raw-text pre-check) that callers
//! surface to the UI. Parsing has already succeeded by the time these run;
//! findings here are quality signals, not failures.
//!
//! # Checks
//!
//! Per entry: timestamp format, section charset (`[A-Za-z0-9_]`), content
//! non-emptiness, plus a short-content warning. Per sequence: duplicate
//! timestamps and adjacent out-of-order pairs, both as warnings.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{TranscriptEntry, ValidationResult};
use crate::parser::strict::canonical_captures;
use crate::timestamp::{is_valid_timestamp, to_seconds};

static SECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("Invalid section regex"));

/// Minimum content length (in chars) below which a warning is recorded.
const SHORT_CONTENT_CHARS: usize = 10;

/// Validate a single entry.
pub fn validate_transcript_entry(entry: &TranscriptEntry) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if !is_valid_timestamp(&entry.timestamp) {
        result.push_error(format!("invalid timestamp '{}'", entry.timestamp));
    }

    if entry.section.is_empty() || !SECTION_RE.is_match(&entry.section) {
        result.push_error(format!(
            "section '{}' must be a non-empty identifier (letters, digits, underscores)",
            entry.section
        ));
    }

    if entry.content.trim().is_empty() {
        result.push_error("content must not be empty");
    } else if entry.content.chars().count() < SHORT_CONTENT_CHARS {
        result.push_warning(format!(
            "content is very short ({} chars)",
            entry.content.chars().count()
        ));
    }

    result
}

/// Validate a whole entry sequence.
///
/// Per-entry findings are prefixed with the 1-based entry position.
/// Duplicate timestamps produce one warning listing every repeated value in
/// first-seen order; adjacent pairs where the predecessor is strictly later
/// than the successor each produce an out-of-order warning (equal adjacent
/// timestamps are fine).
pub fn validate_transcript_entries(entries: &[TranscriptEntry]) -> ValidationResult {
    if entries.is_empty() {
        let mut result = ValidationResult::valid();
        result.push_error("transcript contains no entries");
        return result;
    }

    let mut result = ValidationResult::valid();

    for (i, entry) in entries.iter().enumerate() {
        let entry_result = validate_transcript_entry(entry);
        for error in entry_result.errors {
            result.push_error(format!("Entry {}: {}", i + 1, error));
        }
        for warning in entry_result.warnings {
            result.push_warning(format!("Entry {}: {}", i + 1, warning));
        }
    }

    let duplicates = duplicated_timestamps(entries);
    if !duplicates.is_empty() {
        result.push_warning(format!(
            "Duplicate timestamps found: {}",
            duplicates.join(", ")
        ));
    }

    for (i, pair) in entries.windows(2).enumerate() {
        let before = to_seconds(&pair[0].timestamp);
        let after = to_seconds(&pair[1].timestamp);
        if before > after {
            result.push_warning(format!(
                "Entries {} and {} are out of chronological order ({} > {})",
                i + 1,
                i + 2,
                pair[0].timestamp,
                pair[1].timestamp
            ));
        }
    }

    result
}

/// Timestamp values occurring more than once, in first-seen order.
fn duplicated_timestamps(entries: &[TranscriptEntry]) -> Vec<String> {
    let mut seen: Vec<(&str, usize)> = Vec::new();
    for entry in entries {
        match seen.iter_mut().find(|(ts, _)| *ts == entry.timestamp) {
            Some((_, count)) => *count += 1,
            None => seen.push((&entry.timestamp, 1)),
        }
    }
    seen.into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(ts, _)| ts.to_string())
        .collect()
}

/// Cheap structural pre-check over raw text: at least one non-blank line,
/// and every non-blank line matches the canonical `- HH:MM:SS section
/// content` grammar with a valid timestamp. Used to pick the strict parser
/// before committing to a full parse.
pub fn validate_transcript_format(text: &str) -> bool {
    let mut saw_line = false;
    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        saw_line = true;
        let Some((timestamp, _, _)) = canonical_captures(line) else {
            return false;
        };
        if !is_valid_timestamp(timestamp) {
            return false;
        }
    }
    saw_line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(timestamp: &str, section: &str, content: &str) -> TranscriptEntry {
        TranscriptEntry::new(timestamp, section, content)
    }

    #[test]
    fn test_valid_entry() {
        let result = validate_transcript_entry(&entry("00:01:00", "agenda", "Quarterly numbers"));
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_entry_errors() {
        let result = validate_transcript_entry(&entry("25:00:00", "bad section!", "  "));
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 3);
    }

    #[test]
    fn test_short_content_warns_only() {
        let result = validate_transcript_entry(&entry("00:01:00", "agenda", "Hi all"));
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("very short"));
    }

    #[test]
    fn test_empty_sequence_is_hard_error() {
        let result = validate_transcript_entries(&[]);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("no entries"));
    }

    #[test]
    fn test_per_entry_findings_are_position_prefixed() {
        let entries = vec![
            entry("00:01:00", "agenda", "Quarterly numbers"),
            entry("99:00:00", "agenda", "Broken timestamp entry"),
        ];
        let result = validate_transcript_entries(&entries);
        assert!(!result.is_valid);
        assert!(result.errors[0].starts_with("Entry 2:"));
    }

    #[test]
    fn test_duplicate_timestamps_single_warning() {
        let entries = vec![
            entry("00:01:00", "a", "First mention of topic"),
            entry("00:02:00", "b", "Second topic covered"),
            entry("00:01:00", "c", "Back to the first one"),
            entry("00:02:00", "d", "And the second again"),
        ];
        let result = validate_transcript_entries(&entries);
        assert!(result.is_valid);
        let dup_warnings: Vec<_> = result
            .warnings
            .iter()
            .filter(|w| w.contains("Duplicate"))
            .collect();
        assert_eq!(dup_warnings.len(), 1);
        assert!(dup_warnings[0].contains("00:01:00, 00:02:00"));
    }

    #[test]
    fn test_oversized_hours_reported_not_fatal() {
        // An hour field large enough to overflow the seconds math must come
        // back as an advisory error; validation never aborts.
        let entries = vec![
            entry("00:01:00", "agenda", "Quarterly numbers"),
            entry("1300000:00:00", "agenda", "Broken timestamp entry"),
            entry("00:02:00", "agenda", "Back on track afterwards"),
        ];
        let result = validate_transcript_entries(&entries);
        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("invalid timestamp '1300000:00:00'")));
        // The chronological scan still ran over the saturated value.
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("Entries 2 and 3")));
    }

    #[test]
    fn test_out_of_order_uses_strict_comparison() {
        let entries = vec![
            entry("00:02:00", "a", "Later entry comes first"),
            entry("00:01:00", "b", "Earlier entry comes after"),
            entry("00:01:00", "c", "Equal timestamps are fine"),
        ];
        let result = validate_transcript_entries(&entries);
        let order_warnings: Vec<_> = result
            .warnings
            .iter()
            .filter(|w| w.contains("chronological"))
            .collect();
        // Only the 2:00 -> 1:00 pair; the equal 1:00 -> 1:00 pair is not flagged.
        assert_eq!(order_warnings.len(), 1);
        assert!(order_warnings[0].contains("Entries 1 and 2"));
    }

    #[test]
    fn test_format_precheck() {
        assert!(validate_transcript_format(
            "- 00:00:00 introduction Welcome\n\n- 00:01:30 agenda Items"
        ));
        assert!(!validate_transcript_format(
            "- 00:00:00 introduction Welcome\nnot a canonical line"
        ));
        assert!(!validate_transcript_format(
            "- 25:00:00 introduction Hour out of range"
        ));
        assert!(!validate_transcript_format(""));
        assert!(!validate_transcript_format("\n\n"));
    }
}
