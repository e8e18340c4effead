//! Parser for loosely-structured (machine-transcribed) text.
//!
//! Each non-empty line goes through the grammar cascade; successes become
//! entries and failures become line-numbered errors. When some lines failed
//! but fewer than 80% of them, a whole-document fallback pass re-scans the
//! raw text and manufactures entries with sequential synthetic timestamps
//! for every prose-like line. The fallback re-reads lines the cascade
//! already consumed, so its entries can duplicate cascade output; they are
//! appended after the cascade entries and share the `"transcript"` section,
//! which callers can filter on.

use super::cascade::{match_line, LineOutcome, LIST_MARKER_RE};
use crate::error::{TranscriptError, TranscriptResult};
use crate::models::TranscriptEntry;
use crate::timestamp::{from_seconds, MAX_CLOCK_SECONDS};

/// Section label assigned to fallback entries.
pub const FALLBACK_SECTION: &str = "transcript";

/// Seconds between synthetic timestamps in the fallback pass. Distinct from
/// the 10-second step used by the cascade's narrative grammar.
const FALLBACK_STEP_SECONDS: u32 = 8;

/// Error share at which the parse gives up instead of falling back.
const ERROR_RATE_LIMIT: f64 = 0.8;

/// Parse loosely-structured transcript text.
pub fn parse_lenient(text: &str) -> TranscriptResult<Vec<TranscriptEntry>> {
    if text.trim().is_empty() {
        return Err(TranscriptError::invalid_format("transcript text is empty"));
    }

    let mut entries = Vec::new();
    let mut errors: Vec<(usize, String)> = Vec::new();
    let mut attempted = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        attempted += 1;

        match match_line(line, idx) {
            LineOutcome::Entry(entry) => entries.push(entry),
            LineOutcome::Skipped => {}
            LineOutcome::Unmatched => {
                let line_number = idx + 1;
                errors.push((
                    line_number,
                    format!(
                        "Line {}: unrecognized line; expected '[HH:MM:SS] Speaker: ...', \
                         'HH:MM:SS Speaker: ...', 'Speaker: [HH:MM:SS] ...' or \
                         'HH:MM:SS - Speaker: ...'",
                        line_number
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        if entries.is_empty() {
            return Err(TranscriptError::parsing("no valid entries found in transcript"));
        }
        return Ok(entries);
    }

    let error_rate = errors.len() as f64 / attempted as f64;
    if error_rate < ERROR_RATE_LIMIT {
        let fallback = fallback_entries(text);
        if !fallback.is_empty() {
            entries.extend(fallback);
            return Ok(entries);
        }
    }

    let first_line = errors[0].0;
    let details: Vec<&str> = errors.iter().map(|(_, msg)| msg.as_str()).collect();
    Err(TranscriptError::parsing(format!(
        "{} of {} line(s) could not be parsed: {}",
        errors.len(),
        attempted,
        details.join("; ")
    ))
    .with_line(first_line))
}

/// Whole-document fallback: one entry per surviving raw line, sequential
/// synthetic timestamps starting at 0 and stepping by 8 seconds.
fn fallback_entries(text: &str) -> Vec<TranscriptEntry> {
    let mut out = Vec::new();
    for raw in text.lines() {
        let line = raw.trim();
        if line.chars().count() < 5 || LIST_MARKER_RE.is_match(line) {
            continue;
        }
        let lower = line.to_lowercase();
        if lower.contains("transcript") || lower.contains("generated") {
            continue;
        }
        let seconds = (out.len() as u32)
            .saturating_mul(FALLBACK_STEP_SECONDS)
            .min(MAX_CLOCK_SECONDS);
        out.push(TranscriptEntry::new(
            from_seconds(seconds),
            FALLBACK_SECTION,
            line,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_cascade_input() {
        let text = "[00:00:05] Alice: Kicking off the weekly sync\n\
                    [00:00:45] Bob: Status update on the migration\n\
                    Carol: [00:01:30] Rollout is blocked on review";
        let entries = parse_lenient(text).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].section, "alice");
        assert_eq!(entries[2].timestamp, "00:01:30");
    }

    #[test]
    fn test_header_lines_skipped_silently() {
        let text = "Transcript generated by MeetBot\n\
                    1.\n\
                    [00:00:05] Alice: Kicking off the weekly sync";
        let entries = parse_lenient(text).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].section, "alice");
    }

    #[test]
    fn test_fallback_below_error_threshold() {
        // Two cascade matches, two prose lines the cascade cannot place
        // (lowercase first char, with colons removed they still fail the
        // narrative heuristic): 50% errors, so the fallback pass runs.
        let text = "[00:00:05] Alice: Kicking off the weekly sync\n\
                    the budget figures were reviewed by everyone\n\
                    [00:00:45] Bob: Status update on the migration\n\
                    afterwards the group agreed on next steps";
        let entries = parse_lenient(text).unwrap();
        // 2 cascade entries + 4 fallback entries appended after them.
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].section, "alice");
        assert_eq!(entries[1].section, "bob");

        let fallback: Vec<_> = entries
            .iter()
            .filter(|e| e.section == FALLBACK_SECTION)
            .collect();
        assert_eq!(fallback.len(), 4);
        assert_eq!(fallback[0].timestamp, "00:00:00");
        assert_eq!(fallback[1].timestamp, "00:00:08");
        assert_eq!(fallback[3].timestamp, "00:00:24");
    }

    #[test]
    fn test_fallback_duplicates_cascade_lines() {
        // The fallback re-scans the whole document, so a line the cascade
        // already matched shows up a second time with the fallback section.
        let text = "[00:00:05] Alice: Kicking off the weekly sync\n\
                    the budget figures were reviewed by everyone";
        let entries = parse_lenient(text).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries[1].content.contains("Alice"));
        assert_eq!(entries[1].section, FALLBACK_SECTION);
    }

    #[test]
    fn test_error_rate_at_or_above_limit_fails() {
        // 4 of 5 attempted lines fail: 80% is not below the limit.
        let text = "[00:00:05] Alice: Kicking off the weekly sync\n\
                    zzz:: ##\n\
                    yyy:: ##\n\
                    xxx:: ##\n\
                    www:: ##";
        let err = parse_lenient(text).unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::ParsingError);
        assert_eq!(err.line(), Some(2));
        assert!(err.message().contains("4 of 5"));
    }

    #[test]
    fn test_fallback_yielding_nothing_fails() {
        // 50% error rate, below the limit, but both lines mention
        // "generated" so the fallback's own skip rules drop them. The
        // fallback produces nothing and the parse fails.
        let text = "[00:00:05] Alice: The report was generated early\n\
                    generated:: ##@@";
        let err = parse_lenient(text).unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::ParsingError);
        assert!(err.message().contains("1 of 2"));
    }

    #[test]
    fn test_no_valid_entries_with_no_errors_fails() {
        // Every line is silently skipped: zero errors, zero entries.
        let text = "hey\nok.\n3.";
        let err = parse_lenient(text).unwrap_err();
        assert!(err.message().contains("no valid entries"));
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(parse_lenient("").is_err());
        assert!(parse_lenient(" \n ").is_err());
    }

    #[test]
    fn test_fallback_timestamps_clamp_at_end_of_day() {
        // With an 8-second step the clock runs out after 10,800 emitted
        // lines; later entries pin to 23:59:59 instead of rolling past
        // midnight into a value the codec cannot render.
        let text: String = (0..10_802)
            .map(|i| format!("Agenda point number {} covered at length\n", i))
            .collect();
        let entries = fallback_entries(&text);
        assert_eq!(entries.len(), 10_802);
        assert_eq!(entries[10_799].timestamp, "23:59:52");
        assert_eq!(entries[10_800].timestamp, "23:59:59");
        assert_eq!(entries[10_801].timestamp, "23:59:59");
    }

    #[test]
    fn test_narrative_and_fallback_steps_stay_distinct() {
        // Narrative cascade entries step by 10s from the line index; the
        // fallback steps by 8s from its own emission count.
        let text = "The team walked through the incident retro in detail\n\
                    Something illegible enough to fail every grammar ::: [\n\
                    Further discussion covered the deployment freeze window";
        let entries = parse_lenient(text).unwrap();
        let narrative: Vec<_> = entries.iter().filter(|e| e.section == "speaker").collect();
        assert_eq!(narrative[0].timestamp, "00:00:00"); // index 0 * 10s
        assert_eq!(narrative[1].timestamp, "00:00:20"); // index 2 * 10s

        let fallback: Vec<_> = entries
            .iter()
            .filter(|e| e.section == FALLBACK_SECTION)
            .collect();
        assert_eq!(fallback[0].timestamp, "00:00:00");
        assert_eq!(fallback[1].timestamp, "00:00:08");
        assert_eq!(fallback[2].timestamp, "00:00:16");
    }
}
