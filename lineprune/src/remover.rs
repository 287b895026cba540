//! The line range remover.
//!
//! One run is a single read-modify-write cycle: the whole file is read and
//! decoded, the range is resolved against its line count, one edit is applied,
//! and the result is encoded and written back. Nothing is written until every
//! earlier step has succeeded.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::encoding::TextEncoding;
use crate::error::RemoveError;
use crate::range::{LineRange, RangePolicy};
use crate::text::{ByteRangeRewriter, LineIndex};
use crate::write::{write_file, WriteMode};

/// Everything one removal needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveOptions {
    /// File to rewrite.
    pub path: PathBuf,
    /// 1-based inclusive lines to remove.
    pub range: LineRange,
    /// What to do when the range does not fit the file.
    pub policy: RangePolicy,
    /// Encoding used to decode and re-encode the file.
    pub encoding: TextEncoding,
    /// How the original is replaced.
    pub write_mode: WriteMode,
    /// Keep a `.bak` copy of the original.
    pub backup: bool,
    /// Compute and report, but do not write.
    pub dry_run: bool,
}

impl RemoveOptions {
    /// Options with the defaults: strict range, UTF-8, atomic write, no backup.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, range: LineRange) -> Self {
        Self {
            path: path.into(),
            range,
            policy: RangePolicy::default(),
            encoding: TextEncoding::default(),
            write_mode: WriteMode::default(),
            backup: false,
            dry_run: false,
        }
    }
}

/// A line that a dry run would remove.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedLine {
    /// 1-based line number in the original file.
    pub number: usize,
    /// Line content, terminator included.
    pub text: String,
}

/// Outcome of one removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovalSummary {
    /// File that was (or would be) rewritten.
    pub path: PathBuf,
    /// Range as requested.
    pub range: LineRange,
    /// Policy the range was resolved under.
    pub policy: RangePolicy,
    /// Canonical encoding name.
    pub encoding: &'static str,
    /// Line count before the removal.
    pub original_lines: usize,
    /// Line count after the removal.
    pub new_lines: usize,
    /// `original_lines - new_lines`; negative only when a clamped range re-emits lines.
    pub deleted_lines: i64,
    /// Nothing was written.
    pub dry_run: bool,
    /// Where the original was copied to, if a backup was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<PathBuf>,
    /// Lines that a dry run would remove.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub removed: Vec<RemovedLine>,
}

/// Removes one line range from one file.
#[derive(Debug, Clone)]
pub struct LineRangeRemover {
    options: RemoveOptions,
}

impl LineRangeRemover {
    /// Create a remover for the given options.
    #[must_use]
    pub fn new(options: RemoveOptions) -> Self {
        Self { options }
    }

    /// Read, cut, and (unless dry-running) write the file back.
    ///
    /// # Errors
    ///
    /// - [`RemoveError::NotFound`] / [`RemoveError::PermissionDenied`] for unreadable
    ///   or unwritable files.
    /// - [`RemoveError::Encoding`] when the bytes do not decode, or the result
    ///   does not encode, under the configured encoding.
    /// - [`RemoveError::InvalidRange`] for out-of-bounds ranges under the strict policy.
    ///
    /// The file is untouched whenever an error is returned before the write step.
    pub fn run(&self) -> Result<RemovalSummary, RemoveError> {
        let opts = &self.options;
        let path = opts.path.as_path();

        let bytes = fs::read(path).map_err(|e| RemoveError::from_io(path, e))?;
        let text = opts.encoding.decode(&bytes, path)?;
        let index = LineIndex::new(&text);
        let original_lines = index.line_count();
        let cut = opts.range.resolve(original_lines, opts.policy)?;
        let new_lines = cut.kept_lines(original_lines);

        let removed = if opts.dry_run {
            cut.removed()
                .filter_map(|i| {
                    index.line(&text, i).map(|line| RemovedLine {
                        number: i + 1,
                        text: line.to_owned(),
                    })
                })
                .collect()
        } else {
            Vec::new()
        };

        let mut summary = RemovalSummary {
            path: opts.path.clone(),
            range: opts.range,
            policy: opts.policy,
            encoding: opts.encoding.name(),
            original_lines,
            new_lines,
            deleted_lines: signed_difference(original_lines, new_lines),
            dry_run: opts.dry_run,
            backup: None,
            removed,
        };

        if opts.dry_run {
            return Ok(summary);
        }

        let edit = index.edit_for(&text, cut);
        let mut rewriter = ByteRangeRewriter::new(&*text);
        rewriter.add_edit(edit);
        let rewritten = rewriter.apply()?;
        let encoded = opts.encoding.encode(&rewritten, path)?;

        summary.backup = write_file(path, &encoded, opts.write_mode, opts.backup)?;
        Ok(summary)
    }
}

/// Remove lines `start..=end` (1-based) from `path` with default options.
///
/// # Errors
///
/// See [`LineRangeRemover::run`].
pub fn remove_lines(
    path: impl AsRef<Path>,
    start: usize,
    end: usize,
) -> Result<RemovalSummary, RemoveError> {
    LineRangeRemover::new(RemoveOptions::new(
        path.as_ref(),
        LineRange::new(start, end),
    ))
    .run()
}

fn signed_difference(a: usize, b: usize) -> i64 {
    if a >= b {
        i64::try_from(a - b).unwrap_or(i64::MAX)
    } else {
        i64::try_from(b - a).map_or(i64::MIN, |d| -d)
    }
}
