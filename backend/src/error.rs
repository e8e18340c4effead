//! Error types for the transcript processing pipeline.
//!
//! Two layers:
//!
//! - [`TranscriptError`] - parse failures, tagged with an [`ErrorCode`] and
//!   an optional 1-based line number
//! - [`PipelineError`] - top-level orchestration errors (IO, decoding)
//!
//! Error conversion is automatic via `From` implementations, allowing `?`
//! to work across error boundaries.
//!
//! Per-line failures are never raised individually: the parsers accumulate
//! them across the full scan and raise one [`TranscriptError`] whose message
//! covers every failing line.

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Error Codes
// =============================================================================

/// Machine-readable code attached to every parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The document as a whole does not match the expected format.
    InvalidFileFormat,
    /// Individual lines could not be parsed.
    ParsingError,
}

// =============================================================================
// Transcript Errors
// =============================================================================

/// Failure to parse transcript text.
///
/// The message aggregates every failing line; `line` points at the first
/// one (1-based) when known.
#[derive(Debug, Clone, Error)]
pub enum TranscriptError {
    /// Document-level format failure (empty input, canonical grammar
    /// violations, no parseable entries in strict mode).
    #[error("Invalid file format: {message}")]
    InvalidFileFormat {
        message: String,
        line: Option<usize>,
    },

    /// Line-level failures from the lenient parse.
    #[error("Parsing error: {message}")]
    ParsingError {
        message: String,
        line: Option<usize>,
    },
}

impl TranscriptError {
    /// A format error with no line attribution.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFileFormat {
            message: message.into(),
            line: None,
        }
    }

    /// A parsing error with no line attribution.
    pub fn parsing(message: impl Into<String>) -> Self {
        Self::ParsingError {
            message: message.into(),
            line: None,
        }
    }

    /// Attach a 1-based line number.
    pub fn with_line(mut self, line_number: usize) -> Self {
        match &mut self {
            Self::InvalidFileFormat { line, .. } | Self::ParsingError { line, .. } => {
                *line = Some(line_number);
            }
        }
        self
    }

    /// The machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidFileFormat { .. } => ErrorCode::InvalidFileFormat,
            Self::ParsingError { .. } => ErrorCode::ParsingError,
        }
    }

    /// First failing line, 1-based, when known.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidFileFormat { line, .. } | Self::ParsingError { line, .. } => *line,
        }
    }

    /// The aggregated human-readable message.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidFileFormat { message, .. } | Self::ParsingError { message, .. } => message,
        }
    }
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the error type returned by [`crate::pipeline::process_transcript`]
/// and the file-based entry points.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Parse failure.
    #[error(transparent)]
    Transcript(#[from] TranscriptError),

    /// Failed to read input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for parser operations.
pub type TranscriptResult<T> = Result<T, TranscriptError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_tagging() {
        let err = TranscriptError::invalid_format("empty transcript");
        assert_eq!(err.code(), ErrorCode::InvalidFileFormat);
        assert!(err.line().is_none());

        let err = TranscriptError::parsing("3 line(s) failed").with_line(2);
        assert_eq!(err.code(), ErrorCode::ParsingError);
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::InvalidFileFormat).unwrap();
        assert_eq!(json, "\"INVALID_FILE_FORMAT\"");
        let json = serde_json::to_string(&ErrorCode::ParsingError).unwrap();
        assert_eq!(json, "\"PARSING_ERROR\"");
    }

    #[test]
    fn test_error_conversion_chain() {
        // TranscriptError -> PipelineError
        let parse_err = TranscriptError::parsing("Line 4: unrecognized line");
        let pipeline_err: PipelineError = parse_err.into();
        assert!(pipeline_err.to_string().contains("Line 4"));
    }

    #[test]
    fn test_display_includes_message() {
        let err = TranscriptError::invalid_format("Line 1: invalid timestamp '25:00:00'");
        let msg = err.to_string();
        assert!(msg.contains("Invalid file format"));
        assert!(msg.contains("25:00:00"));
    }
}
