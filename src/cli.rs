//! Command-line surface for the `dots` binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Top-level CLI entry point for the dotfiles synchronization tool.
#[derive(Parser, Debug)]
#[command(
    name = "dots",
    about = "Keep a version-controlled dotfiles directory in sync with your home directory",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Colorize output (disable with --color=false)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub color: bool,

    /// Print the resolved home and dotfiles files directories
    #[arg(long = "printEnvironment", global = true)]
    pub print_environment: bool,

    /// Dotfiles files directory the home tree is mapped to (defaults to
    /// ~/.dotfiles/home; the DOTS_DOTFILES_FILES_DIR environment variable
    /// takes precedence over this flag)
    #[arg(long = "dotfilesFilesDir", global = true, value_name = "PATH")]
    pub dotfiles_files_dir: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Diff the dotfiles files against the home tree
    Diff,
    /// Apply changes from the dotfiles files onto the home tree
    Apply {
        /// Subpath of the dotfiles files directory to apply (file or directory)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
    /// Adopt changes from the home tree into the dotfiles files
    Adopt {
        /// Subpath of the home directory to adopt (file or directory)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
}
