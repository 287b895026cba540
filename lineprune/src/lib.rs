//! Core library for the `lineprune` tool.
//!
//! `lineprune` removes a 1-based inclusive range of lines from a text file,
//! keeping every other line byte-for-byte, terminators included.
//!
//! ```no_run
//! let summary = lineprune::remove_lines("lib/screen.dart", 279, 464)?;
//! println!("Deleted: {} lines", summary.deleted_lines);
//! # Ok::<(), lineprune::RemoveError>(())
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining line ranges, range policies and their resolution.
pub mod range;

/// Module containing line indexing and the byte-range rewriter.
pub mod text;

/// Module for explicit text encodings.
pub mod encoding;

/// Module defining the error taxonomy for removals.
pub mod error;

/// Module containing the `LineRangeRemover` and its summary type.
pub mod remover;

/// Module for writing rewritten content back to disk.
pub mod write;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants.
pub mod constants;

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;

/// Module for colored and JSON output formatting.
pub mod output;

/// Module defining the entry point logic shared by all binaries.
pub mod entry_point;

pub use encoding::TextEncoding;
pub use error::{ParseRangeError, RemoveError};
pub use range::{Cut, LineRange, RangePolicy};
pub use remover::{remove_lines, LineRangeRemover, RemovalSummary, RemoveOptions, RemovedLine};
pub use write::WriteMode;
