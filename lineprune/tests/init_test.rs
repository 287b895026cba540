//! Tests for `lineprune init`.
use anyhow::Result;
use lineprune::config::Config;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_init_creates_config() -> Result<()> {
    let temp = tempdir()?;
    let mut buffer = Vec::new();

    lineprune::commands::run_init_in(temp.path(), &mut buffer)?;

    let config_path = temp.path().join(".lineprune.toml");
    assert!(config_path.exists());

    let content = fs::read_to_string(&config_path)?;
    assert!(content.contains("[lineprune]"));

    // What init writes is what the loader finds
    let config = Config::load_from_path(temp.path());
    assert_eq!(config.config_file_path, Some(config_path.canonicalize()?));
    assert_eq!(config.lineprune.backup, Some(false));

    Ok(())
}

#[test]
fn test_init_skips_existing_config() -> Result<()> {
    let temp = tempdir()?;
    let config_path = temp.path().join(".lineprune.toml");
    let original_content = "# custom config";
    fs::write(&config_path, original_content)?;

    let mut buffer = Vec::new();
    lineprune::commands::run_init_in(temp.path(), &mut buffer)?;

    assert_eq!(fs::read_to_string(&config_path)?, original_content);

    let output = String::from_utf8(buffer)?;
    assert!(output.contains(".lineprune.toml already exists - skipping"));

    Ok(())
}

#[test]
fn test_init_appends_backup_pattern_to_gitignore() -> Result<()> {
    let temp = tempdir()?;
    let gitignore = temp.path().join(".gitignore");
    fs::write(&gitignore, "target")?;

    let mut buffer = Vec::new();
    lineprune::commands::run_init_in(temp.path(), &mut buffer)?;

    assert_eq!(fs::read_to_string(&gitignore)?, "target\n*.bak\n");

    // Second run leaves it alone
    let mut buffer = Vec::new();
    lineprune::commands::run_init_in(temp.path(), &mut buffer)?;
    assert_eq!(fs::read_to_string(&gitignore)?, "target\n*.bak\n");
    assert!(String::from_utf8(buffer)?.contains("already contains *.bak"));

    Ok(())
}

#[test]
fn test_init_creates_gitignore() -> Result<()> {
    let temp = tempdir()?;
    let mut buffer = Vec::new();

    lineprune::commands::run_init_in(temp.path(), &mut buffer)?;

    assert_eq!(fs::read_to_string(temp.path().join(".gitignore"))?, "*.bak\n");
    Ok(())
}
