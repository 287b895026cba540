//! Integration tests for the CLI entry point.

#![allow(clippy::unwrap_used)]

use lineprune::entry_point::run_with_args_to;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn numbered(n: usize) -> String {
    (1..=n).map(|i| format!("L{i}\n")).collect()
}

fn run(args: &[&str]) -> (i32, String) {
    let mut buffer = Vec::new();
    let code = run_with_args_to(args.iter().map(|a| (*a).to_owned()).collect(), &mut buffer).unwrap();
    (code, String::from_utf8(buffer).unwrap())
}

fn arg(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

#[test]
fn test_cli_positional_range() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("ten.txt");
    fs::write(&file, numbered(10)).unwrap();

    let (code, output) = run(&[&arg(&file), "3-5"]);

    assert_eq!(code, 0);
    assert!(output.contains("lines 3-5 from"));
    assert!(output.contains("Original: 10 lines"));
    assert!(output.contains("New: 7 lines"));
    assert!(output.contains("Deleted: 3 lines"));
    assert_eq!(fs::read_to_string(&file).unwrap(), "L1\nL2\nL6\nL7\nL8\nL9\nL10\n");
}

#[test]
fn test_cli_start_end_flags() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("five.txt");
    fs::write(&file, numbered(5)).unwrap();

    let (code, output) = run(&[&arg(&file), "--start", "1", "--end", "5"]);

    assert_eq!(code, 0);
    assert!(output.contains("Deleted: 5 lines"));
    assert_eq!(fs::read_to_string(&file).unwrap(), "");
}

#[test]
fn test_cli_out_of_range_fails_by_default() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("ten.txt");
    fs::write(&file, numbered(10)).unwrap();

    let (code, output) = run(&[&arg(&file), "1-1000"]);

    assert_eq!(code, 1);
    assert!(output.is_empty());
    assert_eq!(fs::read_to_string(&file).unwrap(), numbered(10));
}

#[test]
fn test_cli_clamp_flag() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("ten.txt");
    fs::write(&file, numbered(10)).unwrap();

    let (code, output) = run(&[&arg(&file), "1-1000", "--clamp"]);

    assert_eq!(code, 0);
    assert!(output.contains("Deleted: 10 lines"));
    assert!(output.contains("bounds were clamped"));
    assert_eq!(fs::read_to_string(&file).unwrap(), "");
}

#[test]
fn test_cli_missing_file() {
    let dir = tempdir().unwrap();
    let (code, _) = run(&[&arg(&dir.path().join("nope.txt")), "1"]);
    assert_eq!(code, 1);
}

#[test]
fn test_cli_unknown_encoding() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.txt");
    fs::write(&file, "x\n").unwrap();

    let (code, _) = run(&[&arg(&file), "1", "--encoding", "nope-8"]);

    assert_eq!(code, 1);
    assert_eq!(fs::read_to_string(&file).unwrap(), "x\n");
}

#[test]
fn test_cli_dry_run_preview() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("ten.txt");
    fs::write(&file, numbered(10)).unwrap();

    let (code, output) = run(&[&arg(&file), "9:10", "--dry-run"]);

    assert_eq!(code, 0);
    assert!(output.contains("Would remove lines 9-10"));
    assert!(output.contains("   9 | "));
    assert!(output.contains("L10"));
    assert_eq!(fs::read_to_string(&file).unwrap(), numbered(10));
}

#[test]
fn test_cli_json_output() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("ten.txt");
    fs::write(&file, numbered(10)).unwrap();

    let (code, output) = run(&[&arg(&file), "3-5", "--json", "--backup"]);

    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["original_lines"], 10);
    assert_eq!(value["new_lines"], 7);
    assert_eq!(value["deleted_lines"], 3);
    assert_eq!(value["encoding"], "UTF-8");
    assert!(value["backup"].as_str().unwrap().ends_with("ten.txt.bak"));
}

#[test]
fn test_cli_config_file_is_applied() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(".lineprune.toml"),
        "[lineprune]\nrange_policy = \"clamp\"\nbackup = true\n",
    )
    .unwrap();
    let file = dir.path().join("ten.txt");
    fs::write(&file, numbered(10)).unwrap();

    let (code, output) = run(&[&arg(&file), "8-20"]);

    assert_eq!(code, 0);
    assert!(output.contains("Deleted: 3 lines"));
    assert!(dir.path().join("ten.txt.bak").exists());

    // Flags beat the config file
    let (code, _) = run(&[&arg(&file), "8-20", "--strict"]);
    assert_eq!(code, 1);
}

#[test]
fn test_cli_help_goes_to_writer() {
    let (code, output) = run(&["--help"]);
    assert_eq!(code, 0);
    assert!(output.contains("RANGE"));
    assert!(output.contains(".lineprune.toml"));
}

#[test]
fn test_cli_version() {
    let (code, output) = run(&["--version"]);
    assert_eq!(code, 0);
    assert!(output.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_usage_errors() {
    assert_eq!(run(&[]).0, 1);
    assert_eq!(run(&["file.txt"]).0, 1);
    assert_eq!(run(&["file.txt", "x-y"]).0, 1);
    assert_eq!(run(&["file.txt", "--start", "2"]).0, 1);
}
