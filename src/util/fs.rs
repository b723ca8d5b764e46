//! Filesystem helpers for `.frm` discovery.
//!
//! A MySQL data directory keeps one subdirectory per database, each holding
//! one `.frm` per table. [`find_frm_files`] walks that layout for the `scan`
//! subcommand.

use std::path::{Path, PathBuf};

use crate::FrmError;

/// Depth used when the caller does not ask for one: the data directory
/// itself plus the per-database subdirectories.
pub const DEFAULT_SCAN_DEPTH: u32 = 2;

/// Find `.frm` files under `dir`, sorted by path.
///
/// `depth` counts directory levels including `dir` itself: `None` means
/// [`DEFAULT_SCAN_DEPTH`], `Some(0)` means unlimited. Hidden directories
/// such as `.snapshot` are skipped.
pub fn find_frm_files(dir: &Path, depth: Option<u32>) -> Result<Vec<PathBuf>, FrmError> {
    let max_depth = match depth {
        None => Some(DEFAULT_SCAN_DEPTH),
        Some(0) => None,
        Some(n) => Some(n),
    };

    let mut files = Vec::new();
    let mut pending = vec![(dir.to_path_buf(), 1u32)];

    while let Some((current, level)) = pending.pop() {
        let entries = std::fs::read_dir(&current)
            .map_err(|e| FrmError::Io(format!("Cannot read directory {}: {}", current.display(), e)))?;

        for entry in entries {
            let entry =
                entry.map_err(|e| FrmError::Io(format!("Cannot read directory entry: {}", e)))?;
            let path = entry.path();

            if path.is_dir() {
                if is_hidden(&path) {
                    continue;
                }
                if max_depth.map_or(true, |max| level < max) {
                    pending.push((path, level + 1));
                }
            } else if is_frm(&path) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

fn is_frm(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("frm"))
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}
