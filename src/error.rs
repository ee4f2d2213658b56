//! Error types for the reportdoc library.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for reportdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or rendering a report.
///
/// Malformed tables and unsupported input shapes are not errors: they are
/// recovered inside the parsers (the table run is dropped, or a fallback
/// table is produced). Only conditions the caller must act on end up here.
#[derive(Error, Debug)]
pub enum Error {
    /// The input exceeds one of the configured resource bounds.
    #[error("Input too large: {actual} {kind} exceeds the limit of {limit}")]
    OversizedInput {
        /// Which bound was exceeded
        kind: LimitKind,
        /// Configured maximum
        limit: usize,
        /// Observed value
        actual: usize,
    },

    /// I/O error when writing rendered output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON handed to one of the JSON helpers.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error during rendering (Markdown, text, JSON, HTML, CSV).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Build an oversized-input error.
    pub fn oversized(kind: LimitKind, limit: usize, actual: usize) -> Self {
        Error::OversizedInput {
            kind,
            limit,
            actual,
        }
    }

    /// Check if this error reports an exceeded resource bound.
    pub fn is_oversized(&self) -> bool {
        matches!(self, Error::OversizedInput { .. })
    }
}

/// The resource bound reported by [`Error::OversizedInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    /// Total input size in bytes
    Bytes,
    /// Number of input lines
    Lines,
    /// Nesting depth of structured input
    Depth,
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitKind::Bytes => write!(f, "bytes"),
            LimitKind::Lines => write!(f, "lines"),
            LimitKind::Depth => write!(f, "nesting levels"),
        }
    }
}
