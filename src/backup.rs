use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::BACKUP_SUFFIX;

/// `<dir>/<name>.bak`, next to the original regardless of the walk root.
pub fn backup_path(original: &Path) -> PathBuf {
    let mut name = original
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(BACKUP_SUFFIX);
    original.with_file_name(name)
}

/// Copies `original` to its backup path unless a backup is already there.
///
/// An existing backup always holds the first original ever seen, so it is
/// never overwritten. Returns whether a new backup was written.
pub fn ensure_backup(original: &Path) -> io::Result<bool> {
    let backup = backup_path(original);
    if backup.exists() {
        log::debug!("Keeping existing backup {}", backup.display());
        return Ok(false);
    }

    fs::copy(original, &backup)?;
    log::debug!("Backed up {} to {}", original.display(), backup.display());
    Ok(true)
}

/// Overwrites `original` with the contents of `encoded`.
pub fn replace_original(encoded: &Path, original: &Path) -> io::Result<()> {
    fs::copy(encoded, original)?;
    Ok(())
}
