#![allow(clippy::expect_used, clippy::unwrap_used)]
//! End-to-end checks of the `dots` binary's flag surface, driven through a
//! spawned process with an isolated home and dotfiles directory.

use std::process::Command;

fn dots() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dots"))
}

#[test]
fn print_environment_without_subcommand_also_prints_help() {
    let home = tempfile::tempdir().unwrap();
    let dotfiles = tempfile::tempdir().unwrap();

    let output = dots()
        .args(["--printEnvironment", "--color=false"])
        .env("HOME", home.path())
        .env("USERPROFILE", home.path())
        .env("DOTS_DOTFILES_FILES_DIR", dotfiles.path())
        .output()
        .expect("run dots binary");

    assert!(output.status.success(), "exit code should be 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("DOTFILES FILES DIR:"),
        "environment block missing:\n{stdout}"
    );
    assert!(
        stdout.contains("Usage:"),
        "help should still follow the environment block:\n{stdout}"
    );
}

#[test]
fn bare_invocation_prints_help_and_succeeds() {
    let home = tempfile::tempdir().unwrap();
    let dotfiles = tempfile::tempdir().unwrap();

    let output = dots()
        .env("HOME", home.path())
        .env("USERPROFILE", home.path())
        .env("DOTS_DOTFILES_FILES_DIR", dotfiles.path())
        .output()
        .expect("run dots binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}
