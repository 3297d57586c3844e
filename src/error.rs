//! Typed error hierarchy for the synchronization engine.
//!
//! Internal modules and the command engines return [`SyncError`]; the CLI
//! entry point converts it to [`anyhow::Error`] via `?` and renders it with
//! the failure reporter in `main`. Directory-mode commands never abort on
//! the first per-file failure — they collect every failure in order and
//! return a single [`SyncError::ApplyDirectory`] or
//! [`SyncError::AdoptDirectory`] aggregate at the end.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for path resolution, tree traversal, and file synchronization.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The user's home directory could not be determined.
    #[error("Could not determine the user's home directory")]
    NoHomeDir,

    /// A starting path does not exist or cannot be read.
    #[error("Path {} does not exist or is not readable", .path.display())]
    NotFoundOrUnreadable {
        /// The offending path.
        path: PathBuf,
    },

    /// A root is missing, not a directory, or unreadable.
    #[error("Path {} does not exist or is not a directory or is not readable", .path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// A starting path lies outside the root the command operates on.
    #[error("Path {} is not a subpath of {}", .path.display(), .root.display())]
    NotASubpath {
        /// The resolved starting path.
        path: PathBuf,
        /// The root it was required to be contained in.
        root: PathBuf,
    },

    /// A starting path lies inside a root it must not be contained in
    /// (adopting a dotfiles-managed file onto itself).
    #[error("Path {} can not be a subpath of {}", .path.display(), .root.display())]
    SubpathConflict {
        /// The resolved starting path.
        path: PathBuf,
        /// The root it conflicts with.
        root: PathBuf,
    },

    /// An I/O failure while normalizing a path or enumerating a tree.
    #[error("Error reading {}", .path.display())]
    Io {
        /// Path the failure was observed at.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: std::io::Error,
    },

    /// Copying one dotfiles-side file onto the home tree failed.
    #[error("Error applying {} to {}", .origin.display(), .destination.display())]
    Apply {
        /// Source file in the dotfiles tree.
        origin: PathBuf,
        /// Target file in the home tree.
        destination: PathBuf,
        /// Underlying cause.
        #[source]
        source: std::io::Error,
    },

    /// Copying one home-side file into the dotfiles tree failed.
    #[error("Error adopting {}", .origin.display())]
    Adopt {
        /// Source file in the home tree.
        origin: PathBuf,
        /// Underlying cause.
        #[source]
        source: std::io::Error,
    },

    /// One or more per-file failures during a directory-mode apply.
    #[error("Error applying directory")]
    ApplyDirectory {
        /// Per-file failures, in walk order.
        errors: Vec<SyncError>,
    },

    /// One or more per-file failures during a directory-mode adopt.
    #[error("Error adopting directory")]
    AdoptDirectory {
        /// Per-file failures, in walk order.
        errors: Vec<SyncError>,
    },
}

impl SyncError {
    /// Members of an aggregate failure, or `None` for single errors.
    #[must_use]
    pub fn aggregated(&self) -> Option<&[SyncError]> {
        match self {
            Self::ApplyDirectory { errors } | Self::AdoptDirectory { errors } => Some(errors),
            _ => None,
        }
    }
}
