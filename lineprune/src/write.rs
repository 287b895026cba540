//! Writing rewritten content back to disk.
//!
//! [`WriteMode::Atomic`] stages the new bytes in a temp file next to the
//! target and renames it over the original, so an interrupted run leaves
//! either the old file or the new one. The staged file is deleted on every
//! error path when the [`tempfile::NamedTempFile`] drops.
//! The rename gives the path a new inode: symlinks are resolved first and
//! the permission bits are copied over, but hard links to the old inode keep
//! the old content and ownership becomes that of the running user.
//! [`WriteMode::InPlace`] truncates and rewrites the original directly.
//!
//! Both modes refuse a read-only target before anything is written.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{BACKUP_SUFFIX, TEMP_FILE_PREFIX};
use crate::error::RemoveError;

/// How the rewritten file replaces the original.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteMode {
    /// Temp file in the same directory, then rename.
    #[default]
    Atomic,
    /// Truncate and rewrite the original.
    InPlace,
}

/// `notes.txt` -> `notes.txt.bak`.
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(OsString::new, std::ffi::OsStr::to_os_string);
    name.push(BACKUP_SUFFIX);
    path.with_file_name(name)
}

/// Replace the contents of `path` with `bytes`, optionally keeping a `.bak` copy first.
///
/// Returns the backup location when one was written.
///
/// # Errors
///
/// Returns a classified [`RemoveError`] if the backup, staging or final write fails.
pub fn write_file(
    path: &Path,
    bytes: &[u8],
    mode: WriteMode,
    backup: bool,
) -> Result<Option<PathBuf>, RemoveError> {
    ensure_writable(path)?;

    let backup = if backup {
        Some(write_backup(path)?)
    } else {
        None
    };

    match mode {
        WriteMode::Atomic => write_atomic(path, bytes)?,
        WriteMode::InPlace => fs::write(path, bytes).map_err(|e| RemoveError::from_io(path, e))?,
    }

    Ok(backup)
}

/// A rename only needs write access to the directory, so check the file itself.
fn ensure_writable(path: &Path) -> Result<(), RemoveError> {
    let metadata = fs::metadata(path).map_err(|e| RemoveError::from_io(path, e))?;
    if metadata.permissions().readonly() {
        return Err(RemoveError::PermissionDenied {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn write_backup(path: &Path) -> Result<PathBuf, RemoveError> {
    let backup = backup_path(path);
    fs::copy(path, &backup).map_err(|e| RemoveError::from_io(&backup, e))?;
    Ok(backup)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), RemoveError> {
    // Rename through a symlink would replace the link itself.
    let target = fs::canonicalize(path).map_err(|e| RemoveError::from_io(path, e))?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(&target)
        .map_err(|e| RemoveError::from_io(path, e))?
        .permissions();

    let mut staged = tempfile::Builder::new()
        .prefix(TEMP_FILE_PREFIX)
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| RemoveError::from_io(dir, e))?;
    staged
        .write_all(bytes)
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|e| RemoveError::from_io(staged.path(), e))?;
    fs::set_permissions(staged.path(), permissions)
        .map_err(|e| RemoveError::from_io(staged.path(), e))?;

    staged
        .persist(&target)
        .map_err(|e| RemoveError::from_io(path, e.error))?;
    Ok(())
}
