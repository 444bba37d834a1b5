//! Directory scanning: finds eligible replay files under a root.

mod file_entry;

pub use file_entry::FileEntry;

use std::path::Path;

use crate::error::{CrunchError, Result};

/// Scans `dir` for eligible replay files.
///
/// An entry is eligible iff it is not a directory, is either a regular file
/// or a symlink, and has extension `.slp` (case-sensitive, exact match, not
/// a glob pattern). `recursive` controls whether subdirectories are descended
/// into; when false, only `dir`'s immediate children are considered.
///
/// Traversal order is whatever `std::fs::read_dir` yields and is not sorted:
/// the engine's ordering guarantees are defined relative to this discovery
/// order, not a lexicographic one.
pub fn discover(dir: &Path, recursive: bool) -> Result<Vec<FileEntry>> {
    if !dir.exists() {
        return Err(CrunchError::Scan(format!(
            "directory not found: {}",
            dir.display()
        )));
    }
    if !dir.is_dir() {
        return Err(CrunchError::Scan(format!(
            "not a directory: {}",
            dir.display()
        )));
    }

    let mut entries = Vec::new();
    discover_into(dir, recursive, &mut entries)?;
    Ok(entries)
}

fn discover_into(dir: &Path, recursive: bool, out: &mut Vec<FileEntry>) -> Result<()> {
    let read_dir = std::fs::read_dir(dir).map_err(|e| {
        CrunchError::Scan(format!("failed to read directory {}: {}", dir.display(), e))
    })?;

    for entry in read_dir {
        let entry = entry.map_err(CrunchError::Io)?;
        let path = entry.path();

        let sym_meta = match std::fs::symlink_metadata(&path) {
            Ok(m) => m,
            Err(_) => continue,
        };

        // Symlinked directories are not followed when descending, matching
        // the filesystem iterator's default behavior of not resolving
        // directory symlinks during traversal.
        if sym_meta.is_dir() {
            if recursive {
                discover_into(&path, recursive, out)?;
            }
            continue;
        }

        let is_symlink = sym_meta.file_type().is_symlink();

        // For admission, directory-ness and regular-file-ness are judged on
        // the resolved (followed) target, while symlink-ness is judged on
        // the unresolved entry itself. This excludes a symlink pointing at a
        // directory from admission, even though it is itself a symlink, and
        // still admits a symlink whose target can't be resolved (broken) or
        // is a regular file.
        let resolved = std::fs::metadata(&path).ok();
        let is_dir = resolved.as_ref().map(|m| m.is_dir()).unwrap_or(false);
        let is_regular_file = resolved.as_ref().map(|m| m.is_file()).unwrap_or(false);

        if is_dir || (!is_regular_file && !is_symlink) {
            continue;
        }

        if is_slp(&path) {
            out.push(FileEntry::new(path));
        }
    }

    Ok(())
}

fn is_slp(path: &Path) -> bool {
    path.extension().map(|ext| ext == "slp").unwrap_or(false)
}
