//! The `apply` command: copy dotfiles-tree content onto the home tree.

use std::path::Path;

use crate::error::SyncError;
use crate::fsops;
use crate::paths;

use super::{CommandContext, SyncVerb, sync_file};

/// Apply `from` (a file or directory under the dotfiles root, defaulting to
/// the root itself) onto the home tree.
///
/// Directory mode is best-effort: every file is attempted, failures are
/// collected in walk order and returned as one
/// [`SyncError::ApplyDirectory`] aggregate.
///
/// # Errors
///
/// - [`SyncError::NotFoundOrUnreadable`] when the starting path is missing
///   or unreadable.
/// - [`SyncError::NotASubpath`] when it lies outside the dotfiles root.
/// - [`SyncError::Apply`] for a single-file copy failure.
/// - [`SyncError::ApplyDirectory`] when any per-file copies failed.
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
    if !paths::is_under(&from, ctx.dotfiles_files_dir) {
        return Err(SyncError::NotASubpath {
            path: from,
            root: ctx.dotfiles_files_dir.to_path_buf(),
        });
    }

    if from.is_file() {
        let to = paths::rebase(&from, ctx.dotfiles_files_dir, ctx.home_dir);
        return sync_file(&from, &to, SyncVerb::Apply, ctx);
    }

    let mut errors = Vec::new();
    for entry in fsops::walk_files(&from) {
        match entry {
            Ok(file) => {
                let to = paths::rebase(&file, ctx.dotfiles_files_dir, ctx.home_dir);
                if let Err(err) = sync_file(&file, &to, SyncVerb::Apply, ctx) {
                    errors.push(err);
                }
            }
            Err(err) => errors.push(err),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SyncVerb::Apply.aggregate(errors))
    }
}
