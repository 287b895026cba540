use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::constants::CONFIG_FILENAME;
use crate::remover::RemoveOptions;
use anyhow::Result;
use clap::Parser;
use colored::Colorize;

/// Runs lineprune with the given arguments, writing to stdout.
///
/// # Errors
///
/// Returns an error only if writing the output fails; usage and removal
/// errors are reported on stderr and mapped to a non-zero exit code.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run lineprune with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
///
/// # Errors
///
/// Returns an error only if writing the output fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["lineprune".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(0);
            }
            _ => {
                eprint!("{e}");
                return Ok(1);
            }
        },
    };

    if let Some(command) = cli_var.command {
        match command {
            Commands::Init => crate::commands::run_init(writer)?,
        }
        return Ok(0);
    }

    let (Some(path), Some(range)) = (cli_var.path, cli_var.range.line_range()) else {
        eprintln!(
            "{} a PATH and a line range (RANGE or --start/--end) are required",
            "Error:".red().bold()
        );
        return Ok(1);
    };

    let config = Config::load_from_path(&path);
    let options = match crate::commands::resolve_options(&cli_var.write, path, range, &config) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            return Ok(1);
        }
    };

    if cli_var.output.verbose && !cli_var.output.json {
        log_options(&config, &options);
    }

    crate::commands::run_remove(options, cli_var.output.json, writer)
}

fn log_options(config: &Config, options: &RemoveOptions) {
    eprintln!("[VERBOSE] lineprune v{}", env!("CARGO_PKG_VERSION"));
    match &config.config_file_path {
        Some(path) => eprintln!("[VERBOSE] Config: {}", path.display()),
        None => eprintln!("[VERBOSE] Config: none found ({CONFIG_FILENAME}), using defaults"),
    }
    eprintln!("[VERBOSE] Target: {}", options.path.display());
    eprintln!(
        "[VERBOSE] Range: {} ({} policy)",
        options.range, options.policy
    );
    eprintln!("[VERBOSE] Encoding: {}", options.encoding);
    eprintln!("[VERBOSE] Write mode: {:?}", options.write_mode);
    eprintln!("[VERBOSE] Backup: {}", options.backup);
    if options.dry_run {
        eprintln!("[VERBOSE] Dry run: nothing will be written");
    }
    eprintln!();
}
