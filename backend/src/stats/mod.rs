//! Derived aggregates over a parsed entry sequence.
//!
//! Pure computations handed to the analysis service alongside the entries.
//! Duration is the maximum timestamp over all entries, not the last entry
//! and not a sum: lenient parses can interleave synthetic and real
//! timestamps out of order.

use std::collections::BTreeSet;

use crate::models::{TranscriptEntry, TranscriptStats};
use crate::timestamp::{from_seconds, to_seconds};

/// Total duration as the maximum timestamp across all entries, rendered
/// canonically. `None` when there are no entries.
pub fn calculate_duration(entries: &[TranscriptEntry]) -> Option<String> {
    entries
        .iter()
        .map(|entry| to_seconds(&entry.timestamp))
        .max()
        .map(from_seconds)
}

/// Total number of whitespace-delimited words across all entry contents.
pub fn count_words(entries: &[TranscriptEntry]) -> usize {
    entries
        .iter()
        .map(|entry| entry.content.split_whitespace().count())
        .sum()
}

/// Distinct section labels in ascending lexicographic order.
pub fn get_unique_sections(entries: &[TranscriptEntry]) -> Vec<String> {
    let sections: BTreeSet<&str> = entries.iter().map(|entry| entry.section.as_str()).collect();
    sections.into_iter().map(String::from).collect()
}

/// Bundle all aggregates for one entry sequence.
pub fn compute_stats(entries: &[TranscriptEntry]) -> TranscriptStats {
    TranscriptStats {
        duration: calculate_duration(entries),
        word_count: count_words(entries),
        sections: get_unique_sections(entries),
    }
}
