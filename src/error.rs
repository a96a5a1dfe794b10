//! Error types for rs-papermeta.
//!
//! Most of these never reach callers of the best-effort entry points: the
//! parser degrades instead of failing. They exist so the degradation points
//! are explicit and so `try_parse_file` can surface I/O problems.

use std::path::PathBuf;

/// Error type for transcript loading and parsing operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transcript file does not exist.
    #[error("Transcript not found: {}", .0.display())]
    InputMissing(PathBuf),

    /// The transcript exists but could not be read.
    #[error("Failed to read transcript: {0}")]
    Io(#[from] std::io::Error),

    /// A transcript line carries neither a `[TITLE]` nor a `[PLAIN_TEXT]` marker.
    #[error("Line {line} has no [TITLE] or [PLAIN_TEXT] marker: {text}")]
    MalformedLine {
        /// 1-based line number in the transcript.
        line: usize,
        /// The trimmed line content.
        text: String,
    },

    /// The entity classifier failed or could not be reached.
    #[error("Entity classifier unavailable: {0}")]
    ClassifierUnavailable(String),
}

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, Error>;
