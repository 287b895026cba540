//! Error taxonomy for line removal.
//!
//! Filesystem failures are classified by [`std::io::ErrorKind`] so callers can
//! tell a missing file from a permissions problem without string matching.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::range::LineRange;
use crate::text::RewriteError;

/// Why a text could not pass through the configured encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingFailure {
    /// The bytes on disk are not valid in the encoding.
    Malformed,
    /// The rewritten text has characters the encoding cannot represent.
    Unmappable,
}

impl fmt::Display for EncodingFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "is not valid"),
            Self::Unmappable => write!(f, "cannot be encoded as"),
        }
    }
}

/// Errors produced while removing a line range from a file.
#[derive(Debug, thiserror::Error)]
pub enum RemoveError {
    /// The file does not exist.
    #[error("File not found: {}", path.display())]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },
    /// The file could not be read or written back.
    #[error("Permission denied: {}", path.display())]
    PermissionDenied {
        /// Path that was requested.
        path: PathBuf,
    },
    /// The content does not survive decode/encode under the configured encoding.
    #[error("{} {failure} {encoding}", path.display())]
    Encoding {
        /// Path that was requested.
        path: PathBuf,
        /// Canonical name of the encoding in use.
        encoding: &'static str,
        /// Which direction failed.
        failure: EncodingFailure,
    },
    /// The encoding label is unknown, or names an encoding that cannot be written.
    #[error("Unknown or unsupported encoding: {0}")]
    UnknownEncoding(String),
    /// The range does not fit the file under the strict policy.
    #[error("Invalid line range {range}: file has {total} lines (expected 1 <= start <= end <= {total})")]
    InvalidRange {
        /// The requested range.
        range: LineRange,
        /// Number of lines in the file at read time.
        total: usize,
    },
    /// The computed edit could not be applied.
    #[error(transparent)]
    Rewrite(#[from] RewriteError),
    /// Any other I/O failure.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path that was being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}

impl RemoveError {
    /// Classifies an I/O error for `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source: err },
        }
    }
}

/// Errors produced when parsing a `START-END` range argument.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseRangeError {
    /// Nothing to parse.
    #[error("empty line range")]
    Empty,
    /// One of the bounds is not a non-negative integer.
    #[error("invalid line number '{0}' (expected START-END, START:END or N)")]
    InvalidNumber(String),
}
