//! Process entry point for the `dots` binary.

use std::error::Error as _;
use std::process;

use anyhow::{Context as _, Result};
use clap::{CommandFactory as _, Parser as _};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use dots_cli::cli::{Cli, Command};
use dots_cli::commands::{self, CommandContext};
use dots_cli::environment::Environment;
use dots_cli::error::SyncError;
use dots_cli::logging::Logger;

fn main() {
    let _ = enable_ansi_support::enable_ansi_support();
    let cli = Cli::parse();
    init_tracing();
    let log = Logger::new(cli.color);

    match run(&cli, &log) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            report_failure(&log, &err);
            process::exit(1);
        }
    }
}

/// Internal diagnostics only; user-facing output goes through [`Logger`].
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().compact())
        .with(filter)
        .init();
}

fn run(cli: &Cli, log: &Logger) -> Result<bool> {
    let env = Environment::resolve(cli.dotfiles_files_dir.as_deref())?;

    if cli.print_environment {
        env.print(log);
    }

    let Some(command) = cli.command.as_ref() else {
        Cli::command().print_help().context("printing help")?;
        return Ok(true);
    };

    let ctx = CommandContext {
        home_dir: &env.home_dir,
        dotfiles_files_dir: &env.dotfiles_files_dir,
        logger: Some(log),
        color: cli.color,
    };

    let ok = match command {
        Command::Diff => commands::diff::run(
            &env.dotfiles_files_dir,
            &env.home_dir,
            Some(log),
            cli.color,
        )?,
        Command::Apply { path } => {
            commands::apply::run(path.as_deref(), &ctx)?;
            true
        }
        Command::Adopt { path } => {
            commands::adopt::run(path.as_deref(), &ctx)?;
            true
        }
    };
    Ok(ok)
}

/// Print an expected failure: the top-level message, then aggregate members
/// indented with `>` and underlying causes with `»`.
fn report_failure(log: &Logger, err: &anyhow::Error) {
    let Some(sync) = err.downcast_ref::<SyncError>() else {
        log.error(&format!("{err:#}"));
        return;
    };

    log.error(&sync.to_string());
    if let Some(members) = sync.aggregated() {
        for member in members {
            log.plain(&format!("     > {member}"));
            if let Some(cause) = member.source() {
                log.plain(&format!("       » {cause}"));
            }
        }
    } else if let Some(cause) = sync.source() {
        log.plain(&format!("     » {cause}"));
    }
}
