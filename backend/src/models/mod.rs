//! Domain models for the transcript processing pipeline.
//!
//! This module contains the value objects shared across the pipeline:
//!
//! - [`TranscriptEntry`] - One timestamped, attributed line of transcript
//! - [`ValidationResult`] - Advisory errors and warnings over a parse
//! - [`TranscriptStats`] - Derived aggregates handed to the analysis service
//!
//! Entries are immutable value objects produced only by the parsers; they
//! live for one parse/validate/analyze cycle and are never persisted here.

use serde::{Deserialize, Serialize};

// =============================================================================
// Transcript Entry
// =============================================================================

/// A single validated transcript entry.
///
/// The timestamp is stored canonically (`HH:MM:SS`, zero-padded) and the
/// content is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptEntry {
    /// Canonical `HH:MM:SS` timestamp.
    pub timestamp: String,
    /// Section label (topic or normalized speaker name).
    pub section: String,
    /// Trimmed entry text.
    pub content: String,
}

impl TranscriptEntry {
    /// Create an entry from already-normalized parts.
    pub fn new(
        timestamp: impl Into<String>,
        section: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            section: section.into(),
            content: content.into(),
        }
    }
}

// =============================================================================
// Validation Result
// =============================================================================

/// Advisory validation outcome.
///
/// Consumed by callers for display; never raised as an error. Warnings do
/// not affect [`ValidationResult::is_valid`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True when no errors were recorded.
    pub is_valid: bool,
    /// Hard problems, in discovery order.
    pub errors: Vec<String>,
    /// Non-fatal quality issues, in discovery order.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// A result with no findings.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Record an error and mark the result invalid.
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.is_valid = false;
        self.errors.push(message.into());
    }

    /// Record a warning; validity is unaffected.
    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

// =============================================================================
// Transcript Stats
// =============================================================================

/// Derived aggregates over a parsed entry sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptStats {
    /// Maximum timestamp across all entries, canonical form.
    /// `None` when there are no entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Total whitespace-delimited words across all entry contents.
    pub word_count: usize,
    /// Distinct section labels, ascending lexicographic order.
    pub sections: Vec<String>,
}
