use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_FILENAME;
use crate::range::RangePolicy;
use crate::write::WriteMode;

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The `[lineprune]` section.
    pub lineprune: LinePruneConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
/// Configuration options for lineprune. Unset fields fall back to built-in defaults.
pub struct LinePruneConfig {
    /// Encoding label used to decode and re-encode files.
    pub encoding: Option<String>,
    /// `strict` or `clamp`.
    pub range_policy: Option<RangePolicy>,
    /// Whether to keep a `.bak` copy of the original.
    pub backup: Option<bool>,
    /// `atomic` or `in-place`.
    pub write_mode: Option<WriteMode>,
}

impl Config {
    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// `path` may be the file about to be edited; the search starts in its directory.
    /// Files that fail to parse are skipped.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if !current.is_dir() {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                if let Ok(content) = fs::read_to_string(&candidate) {
                    if let Ok(mut config) = Self::parse(&content) {
                        config.config_file_path = Some(candidate);
                        return config;
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }

    /// Parses the contents of a configuration file.
    ///
    /// # Errors
    ///
    /// Returns the TOML error when the content is malformed or a value has the wrong type.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
