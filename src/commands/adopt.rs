//! The `adopt` command: copy home-tree content into the dotfiles tree.
//!
//! Adopt is direction-aware in directory mode: the default (no starting
//! path) walks the dotfiles root itself, and every discovered file is
//! re-synchronized from its current home-side counterpart. A starting path
//! under the home tree walks home-side files and maps them into the
//! dotfiles tree instead. The mapping is decided per file during the walk.

use std::path::Path;

use crate::error::SyncError;
use crate::fsops;
use crate::paths;

use super::{CommandContext, SyncVerb, sync_file};

/// Adopt `from` (a file or directory, defaulting to the dotfiles root) into
/// the dotfiles tree.
///
/// A starting path other than the dotfiles root itself must be nested under
/// the home root and must not be nested under the dotfiles root — adopting
/// a dotfiles-managed file onto itself is disallowed.
///
/// # Errors
///
/// - [`SyncError::NotFoundOrUnreadable`] when the starting path is missing
///   or unreadable.
/// - [`SyncError::NotASubpath`] when it lies outside the home root.
/// - [`SyncError::SubpathConflict`] when it lies inside the dotfiles root.
/// - [`SyncError::Adopt`] for a single-file copy failure.
/// - [`SyncError::AdoptDirectory`] when any per-file copies failed.
pub fn run(from: Option<&Path>, ctx: &CommandContext<'_>) -> Result<(), SyncError> {
    let from = match from {
        Some(path) => paths::normalize(path).map_err(|source| SyncError::Io {
            path: path.to_path_buf(),
            source,
        })?,
        None => ctx.dotfiles_files_dir.to_path_buf(),
    };

    if !fsops::is_readable(&from) {
        return Err(SyncError::NotFoundOrUnreadable { path: from });
    }
    if from != ctx.dotfiles_files_dir {
        if !paths::is_under(&from, ctx.home_dir) {
            return Err(SyncError::NotASubpath {
                path: from,
                root: ctx.home_dir.to_path_buf(),
            });
        }
        if paths::is_under(&from, ctx.dotfiles_files_dir) {
            return Err(SyncError::SubpathConflict {
                path: from,
                root: ctx.dotfiles_files_dir.to_path_buf(),
            });
        }
    }

    if from.is_file() {
        let to = paths::rebase(&from, ctx.home_dir, ctx.dotfiles_files_dir);
        return sync_file(&from, &to, SyncVerb::Adopt, ctx);
    }

    let mut errors = Vec::new();
    for entry in fsops::walk_files(&from) {
        match entry {
            Ok(file) => {
                // A file found under the dotfiles root is refreshed from its
                // home-side counterpart; anything else is pulled into the
                // dotfiles tree.
                let (origin, destination) = if paths::is_under(&file, ctx.dotfiles_files_dir) {
                    (
                        paths::rebase(&file, ctx.dotfiles_files_dir, ctx.home_dir),
                        file.clone(),
                    )
                } else {
                    (
                        file.clone(),
                        paths::rebase(&file, ctx.home_dir, ctx.dotfiles_files_dir),
                    )
                };
                if let Err(err) = sync_file(&origin, &destination, SyncVerb::Adopt, ctx) {
                    errors.push(err);
                }
            }
            Err(err) => errors.push(err),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SyncVerb::Adopt.aggregate(errors))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ctx<'a>(home: &'a Path, dotfiles: &'a Path) -> CommandContext<'a> {
        CommandContext {
            home_dir: home,
            dotfiles_files_dir: dotfiles,
            logger: None,
            color: false,
        }
    }

    #[test]
    fn start_path_outside_home_is_rejected() {
        let home = tempfile::tempdir().unwrap();
        let dotfiles = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let outside = elsewhere.path().join("x");
        std::fs::write(&outside, b"x").unwrap();

        let err = run(Some(&outside), &ctx(home.path(), dotfiles.path())).unwrap_err();

        assert!(matches!(err, SyncError::NotASubpath { .. }));
    }

    #[test]
    fn start_path_inside_dotfiles_conflicts() {
        // dotfiles root nested inside home, as in the default layout
        let home = tempfile::tempdir().unwrap();
        let dotfiles = home.path().join(".dotfiles/home");
        std::fs::create_dir_all(&dotfiles).unwrap();
        let managed = dotfiles.join("x");
        std::fs::write(&managed, b"x").unwrap();

        let err = run(Some(&managed), &ctx(home.path(), &dotfiles)).unwrap_err();

        assert!(matches!(err, SyncError::SubpathConflict { .. }));
        // guard fired before any copy: the tree is untouched
        assert_eq!(std::fs::read(&managed).unwrap(), b"x");
    }
}
