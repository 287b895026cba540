use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::constants::{BACKUP_SUFFIX, CONFIG_FILENAME};

/// Default configuration written by `lineprune init`.
pub const DEFAULT_CONFIG: &str = r#"
[lineprune]
encoding = "utf-8"         # Any WHATWG label: latin1, windows-1252, shift_jis...
range_policy = "strict"    # strict: reject out-of-range lines | clamp: slice leniently
backup = false             # Keep <file>.bak before rewriting
write_mode = "atomic"      # atomic: temp file + rename | in-place: truncate and rewrite
"#;

/// Executes the init command in the current directory.
pub fn run_init<W: Write>(writer: &mut W) -> Result<()> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    run_init_in(&current_dir, writer)
}

/// Executes the init command in a specific directory.
///
/// This is primarily used for testing.
pub fn run_init_in<W: Write>(root: &Path, writer: &mut W) -> Result<()> {
    writeln!(writer, "Initializing lineprune configuration...")?;

    handle_config_file(root, writer)?;
    handle_gitignore(root, writer)?;

    writeln!(writer, "Initialization complete!")?;
    Ok(())
}

fn handle_config_file<W: Write>(root: &Path, writer: &mut W) -> Result<()> {
    let config_path = root.join(CONFIG_FILENAME);

    if config_path.exists() {
        writeln!(writer, "  • {CONFIG_FILENAME} already exists - skipping.")?;
        return Ok(());
    }

    let mut file = fs::File::create(&config_path)
        .with_context(|| format!("Failed to create {}", config_path.display()))?;
    writeln!(file, "{}", DEFAULT_CONFIG.trim())?;
    writeln!(
        writer,
        "  • Created {CONFIG_FILENAME} with default configuration."
    )?;

    Ok(())
}

fn handle_gitignore<W: Write>(root: &Path, writer: &mut W) -> Result<()> {
    let gitignore_path = root.join(".gitignore");
    let ignore_entry = format!("*{BACKUP_SUFFIX}");

    if gitignore_path.exists() {
        let content = fs::read_to_string(&gitignore_path)?;
        if content.lines().any(|line| line.trim() == ignore_entry) {
            writeln!(
                writer,
                "  • .gitignore already contains {ignore_entry} - skipping."
            )?;
        } else {
            let mut file = fs::OpenOptions::new().append(true).open(&gitignore_path)?;

            // Add a newline before appending if the file doesn't end with one
            if !content.ends_with('\n') && !content.is_empty() {
                writeln!(file)?;
            }

            writeln!(file, "{ignore_entry}")?;
            writeln!(writer, "  • Added {ignore_entry} to .gitignore.")?;
        }
    } else {
        let mut file = fs::File::create(&gitignore_path)?;
        writeln!(file, "{ignore_entry}")?;
        writeln!(writer, "  • Created .gitignore with {ignore_entry}.")?;
    }

    Ok(())
}
