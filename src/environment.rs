//! Root-pair resolution: the user's home directory and the dotfiles files
//! directory every command maps paths between.
//!
//! Both roots must exist as readable directories before any command runs.
//! The dotfiles root is taken from the `DOTS_DOTFILES_FILES_DIR` environment
//! variable when set, then the `--dotfilesFilesDir` flag, then the default
//! `~/.dotfiles/home`.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SyncError;
use crate::fsops;
use crate::logging::Logger;
use crate::paths;

/// Environment variable overriding the dotfiles files directory. Takes
/// precedence over the command-line flag.
pub const DOTFILES_DIR_ENV: &str = "DOTS_DOTFILES_FILES_DIR";

/// Default dotfiles files directory, relative to the home directory.
pub const DEFAULT_DOTFILES_DIR: &str = ".dotfiles/home";

/// The validated root pair a command invocation operates on.
#[derive(Debug, Clone)]
pub struct Environment {
    /// The user's home directory, normalized.
    pub home_dir: PathBuf,
    /// The version-controlled dotfiles files directory, normalized.
    pub dotfiles_files_dir: PathBuf,
}

impl Environment {
    /// Resolve and validate both roots.
    ///
    /// # Errors
    ///
    /// - [`SyncError::NoHomeDir`] when the home directory cannot be
    ///   determined.
    /// - [`SyncError::NotADirectory`] when either root is missing, not a
    ///   directory, or unreadable.
    /// - [`SyncError::Io`] when normalization itself fails.
    pub fn resolve(dotfiles_flag: Option<&Path>) -> Result<Self, SyncError> {
        let home = dirs::home_dir().ok_or(SyncError::NoHomeDir)?;
        Self::from_parts(&home, env::var_os(DOTFILES_DIR_ENV).as_deref(), dotfiles_flag)
    }

    /// Resolution with the environment override passed in explicitly.
    fn from_parts(
        home: &Path,
        env_override: Option<&OsStr>,
        dotfiles_flag: Option<&Path>,
    ) -> Result<Self, SyncError> {
        let home_dir = normalize_checked(home)?;
        if !fsops::is_readable_dir(&home_dir) {
            return Err(SyncError::NotADirectory { path: home_dir });
        }

        // an empty override would normalize to the cwd; treat it as unset
        let candidate = env_override
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                dotfiles_flag
                    .filter(|path| !path.as_os_str().is_empty())
                    .map(Path::to_path_buf)
            })
            .unwrap_or_else(|| home_dir.join(DEFAULT_DOTFILES_DIR));
        let dotfiles_files_dir = normalize_checked(&candidate)?;
        if !fsops::is_readable_dir(&dotfiles_files_dir) {
            return Err(SyncError::NotADirectory {
                path: dotfiles_files_dir,
            });
        }

        debug!(
            home = %home_dir.display(),
            dotfiles = %dotfiles_files_dir.display(),
            "resolved environment"
        );
        Ok(Self {
            home_dir,
            dotfiles_files_dir,
        })
    }

    /// Print the resolved roots as a framed block.
    pub fn print(&self, log: &Logger) {
        log.plain("-----------------------");
        log.plain("Environment:");
        log.plain("");
        log.plain(&format!("HOME:               {}", self.home_dir.display()));
        log.plain(&format!(
            "DOTFILES FILES DIR: {}",
            self.dotfiles_files_dir.display()
        ));
        log.plain("-----------------------");
    }
}

fn normalize_checked(path: &Path) -> Result<PathBuf, SyncError> {
    paths::normalize(path).map_err(|source| SyncError::Io {
        path: path.to_path_buf(),
        source,
    })
}
