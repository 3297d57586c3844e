//! Filesystem primitives: readability probes, the overwrite-copy used by
//! apply/adopt, and the symlink-free file walk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::SyncError;

/// Overwrite `destination` with the full contents of `origin`, creating any
/// missing ancestor directories first.
///
/// Truncate-then-write semantics: a crash mid-copy leaves an incomplete
/// destination file.
///
/// # Errors
///
/// Returns the underlying I/O error from directory creation or the copy
/// itself (permission denied, disk full, ...). No retries.
pub fn recreate_file(origin: &Path, destination: &Path) -> io::Result<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(origin, destination)?;
    debug!(
        origin = %origin.display(),
        destination = %destination.display(),
        "recreated file"
    );
    Ok(())
}

/// Does `path` exist as a regular file the current user can open?
#[must_use]
pub fn is_readable_file(path: &Path) -> bool {
    path.is_file() && fs::File::open(path).is_ok()
}

/// Does `path` exist as a directory the current user can enumerate?
#[must_use]
pub fn is_readable_dir(path: &Path) -> bool {
    path.is_dir() && fs::read_dir(path).is_ok()
}

/// Does `path` exist and is it readable, whatever its kind?
///
/// Files must be openable, directories enumerable. Follows symlinks like
/// the rest of the existence checks.
#[must_use]
pub fn is_readable(path: &Path) -> bool {
    if path.is_dir() {
        fs::read_dir(path).is_ok()
    } else if path.is_file() {
        fs::File::open(path).is_ok()
    } else {
        false
    }
}

/// Lazily enumerate the regular files under `root`.
///
/// Directories are never yielded; symbolic links are neither yielded nor
/// descended into. Enumeration order is whatever the filesystem provides.
/// Traversal problems (unreadable subdirectories, entries vanishing
/// mid-walk) surface as [`SyncError::Io`] items so callers can aggregate or
/// skip them without aborting the walk.
pub fn walk_files(root: &Path) -> impl Iterator<Item = Result<PathBuf, SyncError>> {
    WalkDir::new(root).into_iter().filter_map(|entry| {
        match entry {
            Ok(entry) if entry.file_type().is_file() => Some(Ok(entry.into_path())),
            // directories and symlinks
            Ok(_) => None,
            Err(err) => Some(Err(walk_error(err))),
        }
    })
}

fn walk_error(err: walkdir::Error) -> SyncError {
    let path = err.path().map_or_else(PathBuf::new, Path::to_path_buf);
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
    SyncError::Io { path, source }
}
