//! Candidate enumeration.
//!
//! Walks the target directory (one level, or every level in recursive mode) and
//! keeps regular files with the `.ogg` extension whose names do not carry the
//! backup marker.

use std::ffi::OsStr;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use walkdir::WalkDir;

use crate::{Candidate, ReencodeError, EXTENSION};

static BACKUP_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\.bak").unwrap());

/// Whether `name` looks like a backup this tool (or an earlier run of it) produced.
pub fn is_backup_name(name: &str) -> bool {
    BACKUP_MARKER.is_match(name)
}

fn has_target_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext.eq_ignore_ascii_case(EXTENSION))
        .unwrap_or(false)
}

/// Lists the files under `root` that should be re-encoded, sorted by name within
/// each directory.
///
/// # Errors
///
/// Returns [`ReencodeError::DirectoryNotFound`] if `root` is not a directory.
/// Entries that cannot be read during the walk are skipped with a warning.
pub fn find_candidates(root: &Path, recursive: bool) -> Result<Vec<Candidate>, ReencodeError> {
    if !root.is_dir() {
        return Err(ReencodeError::DirectoryNotFound(root.to_path_buf()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut candidates = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        // Symlinked files count; symlinked directories are not descended into.
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file || !has_target_extension(entry.path()) {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if is_backup_name(&name) {
            log::debug!("Skipping backup file {}", entry.path().display());
            continue;
        }

        let display = if recursive {
            entry
                .path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .display()
                .to_string()
        } else {
            name
        };

        candidates.push(Candidate {
            path: entry.into_path(),
            display,
        });
    }

    log::info!(
        "Found {} candidate(s) under {}",
        candidates.len(),
        root.display()
    );
    Ok(candidates)
}
