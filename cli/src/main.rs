//! # nail Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the nail CLI, a scaffolder
//! that generates front-end projects from a template repository.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handler
//!
//! ## Architecture
//!
//! - `init` is the only command and also the default: `nail` with no
//!   subcommand accepts the same options as `nail init`.
//! - `-v`/`--version` prints the version (`-v` is taken, so verbosity is
//!   raised with the long-only `--verbose`).
//! - All errors are propagated to this level for consistent handling.
//!
//! ## Examples
//!
//! ```bash
//! # Scaffold interactively
//! nail
//!
//! # Print the version
//! nail -v
//!
//! # Run with debug logging
//! nail --verbose --verbose init
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the init handler
//! 4. Format and display any errors that occur
//!
use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (init)
mod common; // Shared utilities (fs, archive, network, ui, ...)
mod core; // Core infrastructure (errors, config, context, manifest, template refs)

use crate::core::error::NailError;

#[derive(Parser, Debug)]
#[command(
    name = "nail",
    about = "nail: scaffold a front-end project from a template",
    long_about = "Fetches a project template, asks for the project name, author and \
                  options, generates the project and optionally installs its dependencies.",
    version,
    disable_version_flag = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Options for the default `init` command.
    #[command(flatten)]
    init: commands::init::InitArgs,

    /// Increase log verbosity (repeatable).
    #[arg(long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print version.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a new project from the template (default).
    #[command(alias = "i")]
    Init(commands::init::InitArgs),
}

/// Top-level arguments that may appear on either side of a subcommand.
const GLOBAL_ARG_IDS: &[&str] = &["verbose"];

/// Parses the command line. Options for `init` given before the `init`
/// subcommand are rejected instead of being dropped.
fn parse_cli<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let mut command = Cli::command();
    let matches = command.try_get_matches_from_mut(args)?;
    if let Some(subcommand) = matches.subcommand_name() {
        if let Some(misplaced) = misplaced_init_arg(&matches) {
            return Err(command.error(
                ErrorKind::ArgumentConflict,
                format!(
                    "'--{}' must come after the '{}' subcommand",
                    misplaced.replace('_', "-"),
                    subcommand
                ),
            ));
        }
    }
    Cli::from_arg_matches(&matches)
}

fn misplaced_init_arg(matches: &ArgMatches) -> Option<String> {
    matches
        .ids()
        .map(|id| id.as_str())
        .filter(|id| !GLOBAL_ARG_IDS.contains(id))
        .find(|id| matches.value_source(id) == Some(ValueSource::CommandLine))
        .map(str::to_string)
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = parse_cli(std::env::args_os()).unwrap_or_else(|e| e.exit());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(cli.verbose)));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let init_args = match cli.command {
        Some(Commands::Init(args)) => args,
        None => cli.init,
    };
    let command_result = commands::init::handle_init(init_args).await;

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        // The fetch stage prints its own failure report.
        let already_reported = e
            .downcast_ref::<NailError>()
            .is_some_and(|n| matches!(n, NailError::Fetch(_)));
        if !already_reported {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}
