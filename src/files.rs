//! Filesystem helpers: recursive copy, wildcard delete/list, whole-file IO.
//!
//! All operations are blocking and best-effort: a failed copy propagates
//! its first error and may leave the destination partially populated.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const DEFAULT_DIR_MODE: u32 = 0o755;

/// Copy a file, symlink, or directory tree from `source` to `dest`.
///
/// Symlinks are recreated as links pointing at the same target, not
/// dereferenced. Directories created at `dest` get [`DEFAULT_DIR_MODE`].
pub fn recursive_copy(source: &Path, dest: &Path) -> Result<()> {
    recursive_copy_with_mode(source, dest, DEFAULT_DIR_MODE)
}

/// [`recursive_copy`] with explicit permission bits for created directories.
///
/// No rollback on failure: the first error propagates and whatever was
/// already copied stays in place.
pub fn recursive_copy_with_mode(source: &Path, dest: &Path, mode: u32) -> Result<()> {
    // symlink_metadata so links are seen as links, not their targets
    let meta = fs::symlink_metadata(source)?;

    if meta.file_type().is_symlink() {
        let target = fs::read_link(source)?;
        return make_symlink(&target, dest);
    }

    if meta.is_file() {
        fs::copy(source, dest)?;
        return Ok(());
    }

    if !dest.exists() {
        make_dir_with_mode(dest, mode)?;
    }

    for entry in fs::read_dir(source)? {
        let name = entry?.file_name();
        recursive_copy_with_mode(&source.join(&name), &dest.join(&name), mode)?;
    }

    Ok(())
}

#[cfg(unix)]
fn make_symlink(target: &Path, dest: &Path) -> Result<()> {
    std::os::unix::fs::symlink(target, dest)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_symlink(target: &Path, dest: &Path) -> Result<()> {
    // No portable symlink primitive; fall back to copying the target.
    fs::copy(target, dest)?;
    Ok(())
}

#[cfg(unix)]
fn make_dir_with_mode(dir: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().mode(mode).create(dir)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_dir_with_mode(dir: &Path, _mode: u32) -> Result<()> {
    fs::create_dir(dir)?;
    Ok(())
}

/// Delete every regular file matching the glob `pattern`.
///
/// Entries that fail to delete (directories included) are skipped.
/// Only an invalid pattern is an error.
pub fn delete_matching(pattern: &str) -> Result<()> {
    for path in list_matching(pattern)? {
        if let Err(e) = fs::remove_file(&path) {
            crate::log_status!("files", "Skipping {}: {}", path.display(), e);
        }
    }
    Ok(())
}

/// Paths matching the glob `pattern`; empty when nothing matches.
///
/// Unreadable entries are dropped rather than aborting the listing.
pub fn list_matching(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern)
        .map_err(|e| Error::Pattern(format!("Invalid glob pattern '{}': {}", pattern, e)))?
        .filter_map(|entry| entry.ok())
        .collect();
    Ok(paths)
}

/// Read the whole file into a string.
pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Write the whole string to a file, replacing any existing content.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    Ok(fs::write(path, content)?)
}
