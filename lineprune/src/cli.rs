use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::range::LineRange;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.lineprune.toml):
  Looked up from the target file's directory upwards. CLI flags win.

  [lineprune]
  encoding = \"utf-8\"         # Any WHATWG label: latin1, windows-1252, shift_jis...
  range_policy = \"strict\"    # strict | clamp
  backup = false             # Keep <file>.bak
  write_mode = \"atomic\"      # atomic | in-place

EXAMPLES:
  lineprune lib/screens/add_device_screen.dart 279-464
  lineprune notes.txt --start 3 --end 5 --backup
  lineprune notes.txt 12 --dry-run
";

/// Which lines to remove, as a positional range or as `--start/--end`.
#[derive(Args, Debug, Default, Clone)]
#[group(required = true, multiple = true)]
pub struct RangeArgs {
    /// Lines to remove: START-END, START:END or a single line N (1-based, inclusive).
    #[arg(value_name = "RANGE", conflicts_with_all = ["start", "end"])]
    pub range: Option<LineRange>,

    /// First line to remove (1-based).
    #[arg(short, long, requires = "end")]
    pub start: Option<usize>,

    /// Last line to remove (1-based, inclusive).
    #[arg(short, long, requires = "start")]
    pub end: Option<usize>,
}

impl RangeArgs {
    /// The requested range, from whichever form was given.
    #[must_use]
    pub fn line_range(&self) -> Option<LineRange> {
        match (self.range, self.start, self.end) {
            (Some(range), _, _) => Some(range),
            (None, Some(start), Some(end)) => Some(LineRange::new(start, end)),
            _ => None,
        }
    }
}

/// Options controlling how the file is read and rewritten.
#[derive(Args, Debug, Default, Clone)]
pub struct WriteArgs {
    /// Clamp out-of-range bounds like slice indices instead of failing.
    #[arg(long, overrides_with = "strict")]
    pub clamp: bool,

    /// Reject ranges outside 1 <= START <= END <= line count (default).
    #[arg(long, overrides_with = "clamp")]
    pub strict: bool,

    /// Text encoding label [default: utf-8].
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Copy the original to <PATH>.bak before rewriting.
    #[arg(short, long, overrides_with = "no_backup")]
    pub backup: bool,

    /// Do not keep a backup, even if the config asks for one.
    #[arg(long, overrides_with = "backup")]
    pub no_backup: bool,

    /// Truncate and rewrite the file directly instead of temp file + rename.
    #[arg(long, overrides_with = "atomic")]
    pub in_place: bool,

    /// Write through a temp file and rename over the original (default).
    #[arg(long, overrides_with = "in_place")]
    pub atomic: bool,

    /// Show the lines that would be removed without writing anything.
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Output the summary as JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output for debugging (resolved config and options, on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command line interface configuration using `clap`.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "lineprune - remove a 1-based inclusive range of lines from a text file",
    long_about = None,
    after_help = CONFIG_HELP,
    subcommand_negates_reqs = true,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    /// Optional subcommand (e.g., init).
    pub command: Option<Commands>,

    /// File to edit.
    #[arg(value_name = "PATH", required = true)]
    pub path: Option<PathBuf>,

    /// Range options (positional RANGE or --start/--end).
    #[command(flatten)]
    pub range: RangeArgs,

    /// Read/write behavior.
    #[command(flatten)]
    pub write: WriteArgs,

    /// Output formatting options.
    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
/// Available subcommands.
pub enum Commands {
    /// Create a default .lineprune.toml in the current directory.
    Init,
}

/// Collapses a `--flag` / `--no-flag` pair into an explicit choice, if any.
#[must_use]
pub fn flag_pair(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}
