//! # nail Init: Dependency Installation
//!
//! File: cli/src/commands/init/install.rs
//!
//! ## Overview
//!
//! Last stage of `nail init`. Offers the package managers that can install
//! the new project's dependencies and runs the chosen one:
//!
//! - The default manager (`npm`) is always offered without probing.
//! - Each alternative (`yarn`, `cnpm`, `pnpm`) is offered only when
//!   `<name> --version` succeeds.
//! - `skip installation` is always the last choice.
//!
//! The install runs `<manager> install` with the project directory as its
//! working directory and the terminal attached. A failed install is reported
//! but never fails the command: the project has already been generated.
//!
use crate::common::process;
use crate::common::system::tools;
use crate::common::ui::{self, prompts::Prompter};
use crate::core::config::InstallConfig;
use crate::core::error::{NailError, Result};
use std::path::Path;
use tracing::{debug, error, info};

pub const INSTALLER_PROMPT: &str =
    "Which package manager do you want to use to install dependencies?";
pub const SKIP_LABEL: &str = "skip installation";
/// Short form accepted by `--installer`.
const SKIP_ALIAS: &str = "skip";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallerChoice {
    Manager(String),
    Skip,
}

/// The default manager followed by every installed alternative.
pub fn installer_candidates(config: &InstallConfig) -> Vec<String> {
    let mut candidates = vec![config.default_manager.clone()];
    for found in tools::detect_available(config.alternatives.as_slice()) {
        if !candidates.contains(&found) {
            candidates.push(found);
        }
    }
    debug!("Installer candidates: {:?}", candidates);
    candidates
}

/// Resolves an `--installer` preset: `skip` or one of the installed
/// candidates. Runs before anything is written.
pub fn preset_installer(config: &InstallConfig, name: &str) -> Result<InstallerChoice> {
    if is_skip(name) {
        return Ok(InstallerChoice::Skip);
    }
    let candidates = installer_candidates(config);
    if candidates.iter().any(|c| c == name) {
        return Ok(InstallerChoice::Manager(name.to_string()));
    }
    anyhow::bail!(NailError::Validation {
        field: "installer",
        value: name.to_string(),
        hint: "Choose an installed package manager or 'skip'.",
    });
}

/// Lets the user choose from `candidates` plus `skip installation`.
pub fn choose_installer(prompter: &dyn Prompter, candidates: &[String]) -> Result<InstallerChoice> {
    let mut items = candidates.to_vec();
    items.push(SKIP_LABEL.to_string());
    let index = prompter.select(INSTALLER_PROMPT, &items, 0)?;
    Ok(match candidates.get(index) {
        Some(manager) => InstallerChoice::Manager(manager.clone()),
        None => InstallerChoice::Skip,
    })
}

pub fn is_skip(name: &str) -> bool {
    name == SKIP_ALIAS || name == SKIP_LABEL
}

/// Runs `<manager> install` in `project_dir`. Returns whether it succeeded;
/// failures are printed and logged, never propagated.
pub fn install(manager: &str, project_dir: &Path) -> bool {
    info!("Installing dependencies with {} in {:?}", manager, project_dir);
    match process::run_streamed(manager, &["install"], project_dir) {
        Ok(()) => {
            println!("{}", ui::success("Dependencies installed."));
            true
        }
        Err(e) => {
            error!("Dependency installation failed: {:?}", e);
            eprintln!(
                "{}",
                ui::failure(&format!("Failed to install dependencies with {}: {}", manager, e))
            );
            eprintln!("{}", ui::advice(&manual_install_hint(manager)));
            false
        }
    }
}

/// Instruction printed when installation is skipped or failed.
pub fn manual_install_hint(manager: &str) -> String {
    format!(
        "Run \"{} install\" in the project directory to install dependencies.",
        manager
    )
}
