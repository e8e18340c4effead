//! Transcript text parsers.
//!
//! Two modes over the same entry model:
//!
//! - [`strict`] - the canonical, user-authored `- HH:MM:SS section content`
//!   format with exhaustive per-line error aggregation
//! - [`lenient`] - loosely-structured speech-to-text output, parsed through
//!   the ordered grammar [`cascade`] with a synthetic-timestamp fallback
//!
//! This module also carries the byte-level helpers used by the file entry
//! points: transcription tools on Windows still emit ISO-8859-1 and
//! Windows-1252, so raw bytes are sniffed and decoded before the line
//! parsers ever run.

pub mod cascade;
pub mod lenient;
pub mod strict;

pub use cascade::{match_line, LineOutcome};
pub use lenient::parse_lenient;
pub use strict::parse_strict;

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the detected encoding, falling back to
/// lossy UTF-8 for anything unrecognized.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => String::from_utf8(bytes.to_vec())
            .unwrap_or_else(|_| String::from_utf8_lossy(bytes).to_string()),
        "iso-8859-1" | "latin-1" | "latin1" => {
            encoding_rs::ISO_8859_15.decode(bytes).0.to_string()
        }
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.to_string(),
        _ => String::from_utf8_lossy(bytes).to_string(),
    }
}
