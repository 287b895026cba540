//! Line removal command.

use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

use crate::cli::{flag_pair, WriteArgs};
use crate::config::Config;
use crate::constants::DEFAULT_ENCODING;
use crate::encoding::TextEncoding;
use crate::error::RemoveError;
use crate::range::{LineRange, RangePolicy};
use crate::remover::{LineRangeRemover, RemoveOptions};
use crate::write::WriteMode;

/// Merge CLI flags over the config file over built-in defaults.
///
/// # Errors
///
/// Returns [`RemoveError::UnknownEncoding`] if the chosen encoding label is not usable.
pub fn resolve_options(
    args: &WriteArgs,
    path: PathBuf,
    range: LineRange,
    config: &Config,
) -> Result<RemoveOptions, RemoveError> {
    let file_config = &config.lineprune;

    let label = args
        .encoding
        .as_deref()
        .or(file_config.encoding.as_deref())
        .unwrap_or(DEFAULT_ENCODING);
    let encoding = TextEncoding::for_label(label)?;

    let policy = match flag_pair(args.clamp, args.strict) {
        Some(true) => RangePolicy::Clamp,
        Some(false) => RangePolicy::Strict,
        None => file_config.range_policy.unwrap_or_default(),
    };

    let write_mode = match flag_pair(args.in_place, args.atomic) {
        Some(true) => WriteMode::InPlace,
        Some(false) => WriteMode::Atomic,
        None => file_config.write_mode.unwrap_or_default(),
    };

    let backup = flag_pair(args.backup, args.no_backup)
        .or(file_config.backup)
        .unwrap_or(false);

    Ok(RemoveOptions {
        path,
        range,
        policy,
        encoding,
        write_mode,
        backup,
        dry_run: args.dry_run,
    })
}

/// Run one removal and report it.
///
/// Removal failures are reported on stderr and turned into exit code 1;
/// only output failures propagate as errors.
pub fn run_remove<W: Write>(options: RemoveOptions, json: bool, writer: &mut W) -> Result<i32> {
    let remover = LineRangeRemover::new(options);
    match remover.run() {
        Ok(summary) => {
            if json {
                crate::output::print_json(writer, &summary)?;
            } else {
                crate::output::print_summary(writer, &summary)?;
            }
            writer.flush()?;
            Ok(0)
        }
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            Ok(1)
        }
    }
}
