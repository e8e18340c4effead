//! # Minutely - transcript parsing and validation core
//!
//! Minutely converts raw transcript text (user-authored notes or
//! speech-to-text output) into an ordered sequence of validated,
//! timestamped entries for a downstream AI analysis service.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  Raw text   │────▶│   Parser    │────▶│  Validation  │────▶│   Entries   │
//! │ (any enc.)  │     │ strict/loose│     │  (advisory)  │     │   + stats   │
//! └─────────────┘     └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use minutely::{process_transcript, ProcessOptions};
//!
//! let text = "- 00:00:00 introduction Welcome\n- 00:01:30 agenda Today's items";
//! let result = process_transcript(text, &ProcessOptions::default()).unwrap();
//! println!("{} entries, duration {:?}", result.entries.len(), result.stats.duration);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Code-tagged error types
//! - [`models`] - Domain models (TranscriptEntry, ValidationResult, stats)
//! - [`timestamp`] - HH:MM:SS codec
//! - [`parser`] - Strict and lenient parsers plus the grammar cascade
//! - [`validation`] - Advisory structural checks
//! - [`stats`] - Derived aggregates
//! - [`pipeline`] - High-level processing API
//!
//! HTTP upload handling, the AI transcription/analysis service, and all UI
//! rendering live in external services that call into this crate.

// Core modules
pub mod error;
pub mod models;

// Timestamp codec
pub mod timestamp;

// Parsing
pub mod parser;

// Validation
pub mod validation;

// Aggregates
pub mod stats;

// High-level API
pub mod pipeline;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ErrorCode, PipelineError, PipelineResult, TranscriptError, TranscriptResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{TranscriptEntry, TranscriptStats, ValidationResult};

// =============================================================================
// Re-exports - Timestamp codec
// =============================================================================

pub use timestamp::{from_seconds, is_valid_timestamp, to_seconds};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{decode_content, detect_encoding, parse_lenient, parse_strict};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{
    validate_transcript_entries, validate_transcript_entry, validate_transcript_format,
};

// =============================================================================
// Re-exports - Stats
// =============================================================================

pub use stats::{calculate_duration, compute_stats, count_words, get_unique_sections};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{
    process_transcript, process_transcript_bytes, process_transcript_file, ParseMode,
    ProcessOptions, ProcessedTranscript,
};
