//! Shared constants.

/// Name of the per-project configuration file.
pub const CONFIG_FILENAME: &str = ".lineprune.toml";

/// Table inside the configuration file that holds our settings.
pub const CONFIG_SECTION: &str = "lineprune";

/// Appended to the file name of a backup copy.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Prefix of the staging file used by atomic writes.
pub const TEMP_FILE_PREFIX: &str = ".lineprune-";

/// Encoding label used when neither the CLI nor the config names one.
pub const DEFAULT_ENCODING: &str = "utf-8";
