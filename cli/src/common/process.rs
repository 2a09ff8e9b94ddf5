//! # nail Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Wrappers around `std::process::Command` for the two kinds of child
//! processes nail starts:
//!
//! - **Quiet probes** (`succeeds_quietly`): run a command with all standard
//!   streams discarded and report whether it exited successfully.
//! - **Streamed runs** (`run_streamed`): run a command in a given directory with
//!   inherited stdio so the user watches its output live.
//!
//! Package managers are shell scripts (`npm.cmd`, `yarn.cmd`) on Windows, so
//! commands are routed through `cmd /C` there.
//!
use crate::core::error::{NailError, Result};
use anyhow::Context;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Builds a `Command` for `program`, going through `cmd /C` on Windows.
pub fn command(program: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", program]);
        cmd
    } else {
        Command::new(program)
    }
}

/// Runs `program args...` with stdio discarded.
///
/// Spawn failures (command missing, permission denied) count as `false`.
pub fn succeeds_quietly(program: &str, args: &[&str]) -> bool {
    let mut cmd = command(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    match cmd.status() {
        Ok(status) => {
            debug!("'{} {}' exited with {}", program, args.join(" "), status);
            status.success()
        }
        Err(e) => {
            debug!("'{}' could not be started: {}", program, e);
            false
        }
    }
}

/// Runs `program args...` inside `cwd`, inheriting the parent's stdio.
///
/// # Errors
///
/// Returns an `Err` if the process cannot be spawned, or a
/// `NailError::ExternalCommand` if it exits unsuccessfully.
pub fn run_streamed(program: &str, args: &[&str], cwd: &Path) -> Result<()> {
    let command_line = format!("{} {}", program, args.join(" "));
    info!("Running '{}' in {:?}", command_line, cwd);

    let status = command(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to start '{}'", command_line))?;

    if !status.success() {
        anyhow::bail!(NailError::ExternalCommand {
            cmd: command_line,
            status: status.to_string(),
        });
    }
    Ok(())
}
