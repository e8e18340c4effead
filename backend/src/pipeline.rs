//! High-level API combining parsing, validation, and stats.
//!
//! # Example
//!
//! ```rust,ignore
//! use minutely::pipeline::{process_transcript, ProcessOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let text = "- 00:00:00 introduction Welcome\n- 00:01:30 agenda Today's items";
//!     let result = process_transcript(text, &ProcessOptions::default())?;
//!     println!("Parsed {} entries", result.entries.len());
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PipelineResult;
use crate::models::{TranscriptEntry, TranscriptStats, ValidationResult};
use crate::parser::{decode_content, detect_encoding, parse_lenient, parse_strict};
use crate::stats::compute_stats;
use crate::validation::{validate_transcript_entries, validate_transcript_format};

/// Which parser to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Pick strict when the raw text passes the canonical format pre-check,
    /// lenient otherwise.
    #[default]
    Auto,
    /// Canonical user-authored format only.
    Strict,
    /// Loosely-structured speech-to-text output.
    Lenient,
}

/// Options for transcript processing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessOptions {
    /// Parser selection.
    pub mode: ParseMode,
    /// Skip the advisory validation pass.
    pub skip_validation: bool,
}

/// Result of one parse/validate/analyze cycle.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedTranscript {
    /// Parsed entries, in parse order.
    pub entries: Vec<TranscriptEntry>,
    /// Advisory findings (a clean result when validation was skipped).
    pub validation: ValidationResult,
    /// Derived aggregates.
    pub stats: TranscriptStats,
    /// The parser that actually ran (resolved from `Auto`).
    pub mode: ParseMode,
}

/// Process raw transcript text: pre-check, parse, validate, aggregate.
pub fn process_transcript(
    text: &str,
    options: &ProcessOptions,
) -> PipelineResult<ProcessedTranscript> {
    let mode = match options.mode {
        ParseMode::Strict => ParseMode::Strict,
        ParseMode::Lenient => ParseMode::Lenient,
        ParseMode::Auto => {
            if validate_transcript_format(text) {
                ParseMode::Strict
            } else {
                ParseMode::Lenient
            }
        }
    };

    let entries = match mode {
        ParseMode::Strict => parse_strict(text)?,
        _ => parse_lenient(text)?,
    };

    let validation = if options.skip_validation {
        ValidationResult::valid()
    } else {
        validate_transcript_entries(&entries)
    };

    let stats = compute_stats(&entries);

    Ok(ProcessedTranscript {
        entries,
        validation,
        stats,
        mode,
    })
}

/// Process transcript bytes, sniffing and decoding the encoding first.
pub fn process_transcript_bytes(
    bytes: &[u8],
    options: &ProcessOptions,
) -> PipelineResult<ProcessedTranscript> {
    let encoding = detect_encoding(bytes);
    let text = decode_content(bytes, &encoding);
    process_transcript(&text, options)
}

/// Process a transcript file from disk.
pub fn process_transcript_file<P: AsRef<Path>>(
    path: P,
    options: &ProcessOptions,
) -> PipelineResult<ProcessedTranscript> {
    let bytes = std::fs::read(path.as_ref())?;
    process_transcript_bytes(&bytes, options)
}
