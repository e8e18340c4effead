//! Ordered line-grammar cascade for loosely-structured transcript text.
//!
//! Speech-to-text services emit many competing line shapes. Each shape is a
//! (matcher, constructor) step; steps are tried in priority order and the
//! first one whose extraction also survives the shared entry constructor
//! wins. Lines that are obviously noise (too short, bare list markers,
//! "transcript" headers) are skipped silently before any matching.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::TranscriptEntry;
use crate::timestamp::{from_seconds, is_valid_timestamp, normalize, MAX_CLOCK_SECONDS};

/// Speaker label assigned when only an embedded timestamp was found.
pub const UNKNOWN_SPEAKER: &str = "unknown_speaker";
/// Speaker label assigned to bare narrative lines.
pub const NARRATIVE_SPEAKER: &str = "speaker";

/// Seconds between synthetic timestamps for narrative lines.
const NARRATIVE_STEP_SECONDS: u32 = 10;

static BRACKETED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(\d{1,2}:\d{2}:\d{2})\]\s*([^:]+?):\s*(.*)$").expect("Invalid grammar regex")
});

static UNBRACKETED_RE: Lazy<Regex> = Lazy::new(|| {
    // The speaker must start with a letter so dash-separated lines fall
    // through to the dashed grammar below.
    Regex::new(r"^(\d{1,2}:\d{2}:\d{2})\s+([A-Za-z][^:]*?):\s*(.*)$").expect("Invalid grammar regex")
});

static SPEAKER_FIRST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^:\[\]]+?):\s*\[(\d{1,2}:\d{2}:\d{2})\]\s*(.*)$").expect("Invalid grammar regex")
});

static DASHED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}:\d{2}:\d{2})\s*-\s*([^:]+?):\s*(.*)$").expect("Invalid grammar regex")
});

static EMBEDDED_TS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,2}:\d{2}:\d{2}").expect("Invalid grammar regex"));

// Shared with the lenient fallback pass so the skip rule cannot drift.
pub(crate) static LIST_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.$").expect("Invalid grammar regex"));

static WHITESPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid grammar regex"));

/// Outcome of running the cascade over one trimmed, non-empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// A grammar matched and the extraction produced a valid entry.
    Entry(TranscriptEntry),
    /// The line is noise; neither an entry nor an error.
    Skipped,
    /// No grammar matched; the caller reports a line error.
    Unmatched,
}

/// Raw fields extracted by a single grammar, before shared validation.
struct GrammarMatch {
    timestamp: String,
    speaker: String,
    content: String,
}

type Matcher = fn(&str, usize) -> Option<GrammarMatch>;

/// The grammars, in priority order. First constructor success wins.
const CASCADE: &[Matcher] = &[
    match_bracketed,
    match_unbracketed,
    match_speaker_first,
    match_dashed,
    match_embedded,
    match_narrative,
];

/// Run the cascade over one line.
///
/// `line` must already be trimmed and non-empty; `line_index` is the
/// 0-based position of the line in the whole document, used for synthetic
/// narrative timestamps.
pub fn match_line(line: &str, line_index: usize) -> LineOutcome {
    if should_skip(line) {
        return LineOutcome::Skipped;
    }
    for matcher in CASCADE {
        if let Some(raw) = matcher(line, line_index) {
            if let Some(entry) = build_entry(&raw.timestamp, &raw.speaker, &raw.content) {
                return LineOutcome::Entry(entry);
            }
        }
    }
    LineOutcome::Unmatched
}

/// Noise filter applied before any grammar: very short lines, bare numbered
/// list markers ("3."), and header lines mentioning "transcript".
fn should_skip(line: &str) -> bool {
    line.chars().count() < 5
        || LIST_MARKER_RE.is_match(line)
        || line.to_lowercase().contains("transcript")
}

/// Shared entry constructor: re-validates the timestamp, requires a speaker
/// and content, and normalizes the speaker label into a section identifier
/// (lowercased, whitespace runs collapsed to underscores).
pub(crate) fn build_entry(timestamp: &str, speaker: &str, content: &str) -> Option<TranscriptEntry> {
    if !is_valid_timestamp(timestamp) {
        return None;
    }
    let speaker = speaker.trim();
    let content = content.trim();
    if speaker.is_empty() || content.is_empty() {
        return None;
    }
    let section = WHITESPACE_RUN_RE
        .replace_all(&speaker.to_lowercase(), "_")
        .into_owned();
    Some(TranscriptEntry::new(normalize(timestamp), section, content))
}

/// `[HH:MM:SS] Speaker: Content`
fn match_bracketed(line: &str, _index: usize) -> Option<GrammarMatch> {
    let caps = BRACKETED_RE.captures(line)?;
    Some(GrammarMatch {
        timestamp: caps[1].to_string(),
        speaker: caps[2].to_string(),
        content: caps[3].to_string(),
    })
}

/// `HH:MM:SS Speaker: Content`
fn match_unbracketed(line: &str, _index: usize) -> Option<GrammarMatch> {
    let caps = UNBRACKETED_RE.captures(line)?;
    Some(GrammarMatch {
        timestamp: caps[1].to_string(),
        speaker: caps[2].to_string(),
        content: caps[3].to_string(),
    })
}

/// `Speaker: [HH:MM:SS] Content`
fn match_speaker_first(line: &str, _index: usize) -> Option<GrammarMatch> {
    let caps = SPEAKER_FIRST_RE.captures(line)?;
    Some(GrammarMatch {
        timestamp: caps[2].to_string(),
        speaker: caps[1].to_string(),
        content: caps[3].to_string(),
    })
}

/// `HH:MM:SS - Speaker: Content`
fn match_dashed(line: &str, _index: usize) -> Option<GrammarMatch> {
    let caps = DASHED_RE.captures(line)?;
    Some(GrammarMatch {
        timestamp: caps[1].to_string(),
        speaker: caps[2].to_string(),
        content: caps[3].to_string(),
    })
}

/// Fallback: an `HH:MM:SS`-shaped substring anywhere in the line. Everything
/// after it becomes content, accepted only when the trimmed remainder is
/// longer than 10 characters.
fn match_embedded(line: &str, _index: usize) -> Option<GrammarMatch> {
    let found = EMBEDDED_TS_RE.find(line)?;
    let rest = &line[found.end()..];
    if rest.trim().chars().count() <= 10 {
        return None;
    }
    Some(GrammarMatch {
        timestamp: found.as_str().to_string(),
        speaker: UNKNOWN_SPEAKER.to_string(),
        content: rest.to_string(),
    })
}

/// Heuristic for plain narrative: no colon at all, reasonably long, starts
/// with an uppercase letter. The timestamp is synthesized from the line's
/// position in the document (10 seconds per line).
fn match_narrative(line: &str, index: usize) -> Option<GrammarMatch> {
    if line.contains(':') || line.chars().count() <= 20 {
        return None;
    }
    let first = line.chars().next()?;
    if !first.is_uppercase() {
        return None;
    }
    // Clock values top out at 23:59:59; clamp so lines past 8639 still
    // carry a timestamp the entry constructor accepts.
    let seconds = (index as u32)
        .saturating_mul(NARRATIVE_STEP_SECONDS)
        .min(MAX_CLOCK_SECONDS);
    Some(GrammarMatch {
        timestamp: from_seconds(seconds),
        speaker: NARRATIVE_SPEAKER.to_string(),
        content: line.to_string(),
    })
}
