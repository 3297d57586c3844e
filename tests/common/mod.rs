// Shared helpers for integration tests.
//
// Provides a pair of temporary-directory-backed trees (home side and
// dotfiles side) so each test can exercise the command engines against an
// isolated filesystem without repeating setup boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use dots_cli::commands::CommandContext;

/// An isolated home/dotfiles tree pair backed by [`tempfile::TempDir`]s.
///
/// Both directories are deleted automatically on drop.
pub struct TreePair {
    /// The simulated home directory.
    pub home: tempfile::TempDir,
    /// The simulated dotfiles files directory.
    pub dotfiles: tempfile::TempDir,
}

impl TreePair {
    /// Create two fresh, empty trees.
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create home temp dir"),
            dotfiles: tempfile::tempdir().expect("create dotfiles temp dir"),
        }
    }

    /// A silent command context over the two trees.
    pub fn ctx(&self) -> CommandContext<'_> {
        CommandContext {
            home_dir: self.home.path(),
            dotfiles_files_dir: self.dotfiles.path(),
            logger: None,
            color: false,
        }
    }

    /// Absolute path of `rel` on the home side.
    pub fn home_path(&self, rel: &str) -> PathBuf {
        self.home.path().join(rel)
    }

    /// Absolute path of `rel` on the dotfiles side.
    pub fn dotfiles_path(&self, rel: &str) -> PathBuf {
        self.dotfiles.path().join(rel)
    }

    /// Write `content` to `rel` on the home side, creating parents.
    pub fn write_home(&self, rel: &str, content: &str) -> PathBuf {
        write(&self.home_path(rel), content)
    }

    /// Write `content` to `rel` on the dotfiles side, creating parents.
    pub fn write_dotfiles(&self, rel: &str, content: &str) -> PathBuf {
        write(&self.dotfiles_path(rel), content)
    }

    /// Read `rel` on the home side as UTF-8.
    pub fn read_home(&self, rel: &str) -> String {
        fs::read_to_string(self.home_path(rel)).expect("read home-side file")
    }

    /// Read `rel` on the dotfiles side as UTF-8.
    pub fn read_dotfiles(&self, rel: &str) -> String {
        fs::read_to_string(self.dotfiles_path(rel)).expect("read dotfiles-side file")
    }
}

fn write(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directories");
    }
    fs::write(path, content).expect("write fixture file");
    path.to_path_buf()
}
