//! The `diff` command: report textual differences between corresponding
//! files in two trees.
//!
//! Diff is report-only. Missing or unreadable counterparts are warned about
//! and skipped; they never count as differences and never fail the run.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::SyncError;
use crate::fsops;
use crate::logging::{Logger, blue, green, red};
use crate::paths;
use crate::render;

/// Diff every file under `from_dir` against its counterpart under `to_dir`.
///
/// Returns `Ok(true)` when no compared file differed — a policy result, not
/// an error. Skipped files never flip the result.
///
/// # Errors
///
/// Returns [`SyncError::NotADirectory`] when either root is missing, not a
/// directory, or unreadable. Per-file anomalies are never errors.
pub fn run(
    from_dir: &Path,
    to_dir: &Path,
    logger: Option<&Logger>,
    color: bool,
) -> Result<bool, SyncError> {
    let from_dir = normalize_dir(from_dir)?;
    let to_dir = normalize_dir(to_dir)?;

    let mut has_changes = false;

    for entry in fsops::walk_files(&from_dir) {
        let from = match entry {
            Ok(path) => path,
            Err(err) => {
                warn(logger, &format!("{err}, skipping..."));
                continue;
            }
        };
        let to = paths::rebase(&from, &from_dir, &to_dir);

        if !fsops::is_readable_file(&from) {
            warn(
                logger,
                &format!(
                    "File {} is not readable, skipping...",
                    blue(&from.display().to_string(), color)
                ),
            );
            continue;
        }
        if !fsops::is_readable_file(&to) {
            warn(
                logger,
                &format!(
                    "File {} does not exist or is not a file or is not readable, skipping...",
                    blue(&to.display().to_string(), color)
                ),
            );
            continue;
        }

        // reads can still fail here (races, non-UTF-8); report-only, so skip
        let (from_text, to_text) = match (fs::read_to_string(&from), fs::read_to_string(&to)) {
            (Ok(a), Ok(b)) => (a, b),
            (Err(err), _) | (_, Err(err)) => {
                debug!(error = %err, "unreadable during comparison");
                warn(
                    logger,
                    &format!(
                        "Could not read {} or {}, skipping...",
                        blue(&from.display().to_string(), color),
                        blue(&to.display().to_string(), color)
                    ),
                );
                continue;
            }
        };

        if let Some(log) = logger {
            log.plain_no_nl(&format!(
                "Diffing {} against {} ...",
                blue(&from.display().to_string(), color),
                blue(&to.display().to_string(), color),
            ));
        }

        let rendered = render::render_diff(&from_text, &to_text, color);
        if rendered.is_empty() {
            if let Some(log) = logger {
                log.plain(&format!(" {}", green("✓", color)));
            }
        } else {
            if let Some(log) = logger {
                log.plain(&format!(" {}", red("✕", color)));
                log.plain(&rendered);
            }
            has_changes = true;
        }
    }

    Ok(!has_changes)
}

fn normalize_dir(dir: &Path) -> Result<std::path::PathBuf, SyncError> {
    let normalized = paths::normalize(dir).map_err(|source| SyncError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    if !fsops::is_readable_dir(&normalized) {
        return Err(SyncError::NotADirectory { path: normalized });
    }
    Ok(normalized)
}

fn warn(logger: Option<&Logger>, msg: &str) {
    if let Some(log) = logger {
        log.warn(msg);
    }
}
