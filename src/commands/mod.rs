//! The three command engines (`diff`, `apply`, `adopt`) and the per-file
//! synchronization plumbing they share.
//!
//! Apply and adopt differ only in mapping direction and error labels; both
//! funnel every file through [`sync_file`], which prints the
//! `"Verb origin to destination ..."` progress line, performs the copy, and
//! completes the line with a `✓` or `✕` glyph.

pub mod adopt;
pub mod apply;
pub mod diff;

use std::path::Path;

use crate::error::SyncError;
use crate::fsops;
use crate::logging::{Logger, blue, green, red};

/// Per-invocation collaborators shared by apply and adopt.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext<'a> {
    /// The user's home directory.
    pub home_dir: &'a Path,
    /// The version-controlled dotfiles files directory.
    pub dotfiles_files_dir: &'a Path,
    /// Optional logger; all output is suppressed when absent.
    pub logger: Option<&'a Logger>,
    /// Whether to colorize paths and glyphs.
    pub color: bool,
}

/// Which direction a synchronization runs in; selects progress-line wording
/// and error labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SyncVerb {
    /// Dotfiles tree onto home tree.
    Apply,
    /// Home tree into dotfiles tree.
    Adopt,
}

impl SyncVerb {
    const fn doing(self) -> &'static str {
        match self {
            Self::Apply => "Applying",
            Self::Adopt => "Adopting",
        }
    }

    fn failure(self, origin: &Path, destination: &Path, source: std::io::Error) -> SyncError {
        match self {
            Self::Apply => SyncError::Apply {
                origin: origin.to_path_buf(),
                destination: destination.to_path_buf(),
                source,
            },
            Self::Adopt => SyncError::Adopt {
                origin: origin.to_path_buf(),
                source,
            },
        }
    }

    fn aggregate(self, errors: Vec<SyncError>) -> SyncError {
        match self {
            Self::Apply => SyncError::ApplyDirectory { errors },
            Self::Adopt => SyncError::AdoptDirectory { errors },
        }
    }
}

/// Copy `origin` over `destination`, reporting progress and outcome.
fn sync_file(
    origin: &Path,
    destination: &Path,
    verb: SyncVerb,
    ctx: &CommandContext<'_>,
) -> Result<(), SyncError> {
    if let Some(log) = ctx.logger {
        log.plain_no_nl(&format!(
            "{} {} to {} ...",
            verb.doing(),
            blue(&origin.display().to_string(), ctx.color),
            blue(&destination.display().to_string(), ctx.color),
        ));
    }

    match fsops::recreate_file(origin, destination) {
        Ok(()) => {
            if let Some(log) = ctx.logger {
                log.plain(&format!(" {}", green("✓", ctx.color)));
            }
            Ok(())
        }
        Err(source) => {
            if let Some(log) = ctx.logger {
                log.plain(&format!(" {}", red("✕", ctx.color)));
            }
            Err(verb.failure(origin, destination, source))
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn verbs_label_progress_lines() {
        assert_eq!(SyncVerb::Apply.doing(), "Applying");
        assert_eq!(SyncVerb::Adopt.doing(), "Adopting");
    }

    #[test]
    fn apply_failure_names_both_sides() {
        let err = SyncVerb::Apply.failure(
            Path::new("/d/x"),
            Path::new("/h/x"),
            std::io::Error::other("boom"),
        );
        assert_eq!(err.to_string(), "Error applying /d/x to /h/x");
    }

    #[test]
    fn adopt_failure_names_origin_only() {
        let err = SyncVerb::Adopt.failure(
            Path::new("/h/x"),
            Path::new("/d/x"),
            std::io::Error::other("boom"),
        );
        assert_eq!(err.to_string(), "Error adopting /h/x");
    }

    #[test]
    fn aggregates_match_their_verbs() {
        assert_eq!(
            SyncVerb::Apply.aggregate(vec![]).to_string(),
            "Error applying directory"
        );
        assert_eq!(
            SyncVerb::Adopt.aggregate(vec![]).to_string(),
            "Error adopting directory"
        );
    }

    #[test]
    fn sync_file_copies_without_a_logger() {
        let tmp = tempfile::tempdir().unwrap();
        let origin = tmp.path().join("origin");
        let destination = tmp.path().join("nested/destination");
        std::fs::write(&origin, b"payload").unwrap();

        let ctx = CommandContext {
            home_dir: tmp.path(),
            dotfiles_files_dir: tmp.path(),
            logger: None,
            color: false,
        };
        sync_file(&origin, &destination, SyncVerb::Apply, &ctx).unwrap();

        assert_eq!(std::fs::read(&destination).unwrap(), b"payload");
    }

    #[test]
    fn sync_file_surfaces_copy_failures() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing");
        let destination = tmp.path().join("destination");

        let ctx = CommandContext {
            home_dir: tmp.path(),
            dotfiles_files_dir: tmp.path(),
            logger: None,
            color: false,
        };
        let err = sync_file(&missing, &destination, SyncVerb::Adopt, &ctx).unwrap_err();

        assert!(matches!(err, SyncError::Adopt { .. }));
    }
}
