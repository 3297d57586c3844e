//! Dotfiles synchronization engine.
//!
//! Keeps a version-controlled dotfiles directory in sync with the matching
//! files in the user's home directory, in either direction:
//!
//! - **diff** — report textual differences between the two trees
//! - **apply** — copy dotfiles-tree content onto the home tree
//! - **adopt** — copy home-tree content into the dotfiles tree
//!
//! The public API is organised into thin layers:
//!
//! - **[`paths`]** — lexical normalization, containment, re-rooting
//! - **[`fsops`]** — readability probes, overwrite copy, symlink-free walk
//! - **[`render`]** — line-diff rendering
//! - **[`commands`]** — the three command engines and their aggregation policy
//! - **[`environment`]**, **[`cli`]**, **[`logging`]**, **[`error`]** — the
//!   surrounding plumbing used by the `dots` binary

pub mod cli;
pub mod commands;
pub mod environment;
pub mod error;
pub mod fsops;
pub mod logging;
pub mod paths;
pub mod render;
