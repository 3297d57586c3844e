//! Path resolution: normalization, containment, and re-rooting between the
//! home tree and the dotfiles tree.
//!
//! All operations here are lexical. Symlinks are never resolved — the tool
//! synchronizes the paths the user named, not their canonical targets.

use std::env;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against the current working directory and fold
/// `.`/`..` components lexically.
///
/// Idempotent: normalizing an already-normalized path yields the same path.
///
/// # Errors
///
/// Returns an error only when the current working directory cannot be
/// determined while absolutizing a relative path.
pub fn normalize(path: &Path) -> io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            // pop() refuses to remove the root, so "/.." stays "/"
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    Ok(normalized)
}

/// Map a path known to lie under `from_root` to its counterpart under
/// `to_root` by substituting the root prefix.
///
/// Paths not contained in `from_root` are returned unchanged.
#[must_use]
pub fn rebase(path: &Path, from_root: &Path, to_root: &Path) -> PathBuf {
    match path.strip_prefix(from_root) {
        Ok(relative) => to_root.join(relative),
        Err(_) => path.to_path_buf(),
    }
}

/// Component-wise containment check: is `path` equal to or nested under
/// `root`?
///
/// Unlike a string prefix test this never matches across component
/// boundaries (`/dd/x` is not under `/d`).
#[must_use]
pub fn is_under(path: &Path, root: &Path) -> bool {
    path.starts_with(root)
}
