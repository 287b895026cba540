use crate::range::RangePolicy;
use crate::remover::RemovalSummary;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" or ".\" prefix (for cleaner output)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use lineprune::output::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\lib\\main.dart")), "lib/main.dart");
/// assert_eq!(normalize_display_path(Path::new("./src/main.rs")), "src/main.rs");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    let clean = s.trim_start_matches(r"\\?\");
    let normalized = clean.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Whether a clamped range asked for lines the file did not have.
#[must_use]
pub fn was_clamped(summary: &RemovalSummary) -> bool {
    let range = summary.range;
    summary.policy == RangePolicy::Clamp
        && (range.start == 0
            || range.end > summary.original_lines
            || range.start > range.end.saturating_add(1))
}

/// Print the human-readable summary of a removal.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_summary(writer: &mut impl Write, summary: &RemovalSummary) -> std::io::Result<()> {
    let path = normalize_display_path(&summary.path);

    if summary.dry_run {
        writeln!(
            writer,
            "{} Would remove lines {} from {}",
            "[DRY-RUN]".yellow(),
            summary.range,
            path
        )?;
        print_removed_lines(writer, summary)?;
    } else {
        writeln!(
            writer,
            "{} lines {} from {}",
            "Removed".green().bold(),
            summary.range,
            path
        )?;
    }

    writeln!(writer, "   Original: {} lines", summary.original_lines)?;
    writeln!(writer, "   New: {} lines", summary.new_lines)?;
    writeln!(writer, "   Deleted: {} lines", summary.deleted_lines)?;

    if let Some(backup) = &summary.backup {
        writeln!(writer, "   Backup: {}", normalize_display_path(backup))?;
    }

    if was_clamped(summary) {
        writeln!(
            writer,
            "   {} range {} does not fit a {}-line file; bounds were clamped",
            "Note:".yellow(),
            summary.range,
            summary.original_lines
        )?;
    }

    Ok(())
}

fn print_removed_lines(writer: &mut impl Write, summary: &RemovalSummary) -> std::io::Result<()> {
    let width = summary
        .removed
        .last()
        .map_or(1, |line| line.number.to_string().len());
    for line in &summary.removed {
        writeln!(
            writer,
            "  {:>width$} | {}",
            line.number,
            line.text.trim_end_matches(['\r', '\n']).dimmed()
        )?;
    }
    Ok(())
}

/// Print the summary as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn print_json(writer: &mut impl Write, summary: &RemovalSummary) -> anyhow::Result<()> {
    writeln!(writer, "{}", serde_json::to_string_pretty(summary)?)?;
    Ok(())
}
