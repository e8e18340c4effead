//! Parser for the canonical, user-authored transcript format.
//!
//! Grammar, one entry per line:
//!
//! ```text
//! - HH:MM:SS section content...
//! ```
//!
//! Every line is checked exhaustively; failures accumulate with 1-based line
//! numbers and the whole parse fails with one aggregated error covering
//! every offending line. There is no early abort and no silent repair: an
//! uppercase section is reported, never folded to lowercase.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{TranscriptError, TranscriptResult};
use crate::models::TranscriptEntry;
use crate::timestamp::{is_valid_timestamp, normalize};

static CANONICAL_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-\s+(\d{1,2}:\d{2}:\d{2})\s+(\S+)\s*(.*)$").expect("Invalid canonical line regex")
});

/// Capture the canonical line fields `(timestamp, section, content)`.
///
/// Shared with the raw-format pre-check in the validation module.
pub(crate) fn canonical_captures(line: &str) -> Option<(&str, &str, &str)> {
    let caps = CANONICAL_LINE_RE.captures(line)?;
    let timestamp = caps.get(1)?.as_str();
    let section = caps.get(2)?.as_str();
    let content = caps.get(3)?.as_str();
    Some((timestamp, section, content))
}

/// Parse user-authored transcript text in the canonical format.
///
/// Blank lines are skipped. Entries come back in source line order, never
/// re-sorted. A scan that collects zero errors but also zero entries is
/// still a failure: "valid but empty" is not a success case.
pub fn parse_strict(text: &str) -> TranscriptResult<Vec<TranscriptEntry>> {
    if text.trim().is_empty() {
        return Err(TranscriptError::invalid_format("transcript text is empty"));
    }

    let mut entries = Vec::new();
    let mut errors: Vec<(usize, String)> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_number = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some((timestamp, section, content)) = canonical_captures(line) else {
            errors.push((
                line_number,
                format!(
                    "Line {}: does not match expected format '- HH:MM:SS section content'",
                    line_number
                ),
            ));
            continue;
        };

        let mut line_ok = true;

        if !is_valid_timestamp(timestamp) {
            errors.push((
                line_number,
                format!("Line {}: invalid timestamp '{}'", line_number, timestamp),
            ));
            line_ok = false;
        }

        if section.chars().any(|c| c.is_uppercase()) {
            errors.push((
                line_number,
                format!(
                    "Line {}: section '{}' should be lowercase; this may indicate a missing section name",
                    line_number, section
                ),
            ));
            line_ok = false;
        }

        let content = content.trim();
        if content.is_empty() {
            errors.push((
                line_number,
                format!("Line {}: content must not be empty", line_number),
            ));
            line_ok = false;
        }

        if line_ok {
            entries.push(TranscriptEntry::new(normalize(timestamp), section, content));
        }
    }

    if !errors.is_empty() {
        let first_line = errors[0].0;
        let details: Vec<&str> = errors.iter().map(|(_, msg)| msg.as_str()).collect();
        return Err(TranscriptError::invalid_format(format!(
            "{} line(s) could not be parsed: {}",
            errors.len(),
            details.join("; ")
        ))
        .with_line(first_line));
    }

    if entries.is_empty() {
        return Err(TranscriptError::invalid_format(
            "no valid entries found in transcript",
        ));
    }

    Ok(entries)
}
