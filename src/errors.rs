//! Error types for the conversion pipeline.
//!
//! Every variant here is fatal: the run stops at the first one. Shape problems
//! inside a well-formed record are never errors; the record view absorbs them.
//!
//! # Error Codes
//!
//! - E001-E009: input errors
//! - E010-E019: parse errors
//! - E020-E029: output errors
//!
//! # Example
//!
//! ```rust
//! use evifuncqa_csv::errors::{ConvertError, ErrorCode};
//!
//! let err = ConvertError::malformed_line("data.jsonl", 3, "{oops", "key must be a string");
//! assert_eq!(err.code(), ErrorCode::PARSE_MALFORMED_LINE);
//! assert!(err.is_user_fixable());
//! ```

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Longest slice of an offending line quoted in an error message
const SNIPPET_CHARS: usize = 120;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// Input error - file not found
    pub const INPUT_NOT_FOUND: ErrorCode = ErrorCode("E001");
    /// Input error - file could not be opened or read
    pub const INPUT_UNREADABLE: ErrorCode = ErrorCode("E002");
    /// Parse error - a non-blank line is not a JSON object
    pub const PARSE_MALFORMED_LINE: ErrorCode = ErrorCode("E010");
    /// Output error - destination could not be created or written
    pub const OUTPUT_UNWRITABLE: ErrorCode = ErrorCode("E020");
    /// Output error - a cell value could not be serialized
    pub const OUTPUT_SERIALIZE: ErrorCode = ErrorCode("E021");

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fatal conversion error.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input file not found: {}", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input {}", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed JSON at {}:{line}: {reason} (line: {snippet})", .path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        snippet: String,
        reason: String,
    },

    #[error("failed to write output {}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize output cell")]
    Serialize(#[from] serde_json::Error),
}

impl ConvertError {
    /// Classify an error raised while opening or reading the input.
    pub fn input(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == io::ErrorKind::NotFound {
            Self::InputNotFound { path, source }
        } else {
            Self::InputUnreadable { path, source }
        }
    }

    pub fn malformed_line(
        path: impl AsRef<Path>,
        line: usize,
        content: &str,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedLine {
            path: path.as_ref().to_path_buf(),
            line,
            snippet: snippet(content),
            reason: reason.into(),
        }
    }

    pub fn output(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::OutputUnwritable {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InputNotFound { .. } => ErrorCode::INPUT_NOT_FOUND,
            Self::InputUnreadable { .. } => ErrorCode::INPUT_UNREADABLE,
            Self::MalformedLine { .. } => ErrorCode::PARSE_MALFORMED_LINE,
            Self::OutputUnwritable { .. } => ErrorCode::OUTPUT_UNWRITABLE,
            Self::Serialize(_) => ErrorCode::OUTPUT_SERIALIZE,
        }
    }

    /// Whether the user can fix this by changing paths or input data.
    pub fn is_user_fixable(&self) -> bool {
        match self {
            Self::InputNotFound { .. } | Self::MalformedLine { .. } => true,
            Self::OutputUnwritable { source, .. } => matches!(
                source.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
            ),
            Self::InputUnreadable { .. } | Self::Serialize(_) => false,
        }
    }
}

fn snippet(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(SNIPPET_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
