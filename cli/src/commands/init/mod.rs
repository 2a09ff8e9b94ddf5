//! # nail Init Command
//!
//! File: cli/src/commands/init/mod.rs
//!
//! ## Overview
//!
//! Implements `nail init` (also what a bare `nail` runs): scaffolds a new
//! front-end project from a template repository.
//!
//! ## Architecture
//!
//! The command is a straight pipeline; each stage lives in its own module and
//! the first failing stage stops the run:
//!
//! 1. **`fetch`**: stage a fresh copy of the template.
//! 2. **`answers`**: project name, author, e2e opt-in and confirmation.
//! 3. **`materialize`**: copy the template and write the patched manifest.
//! 4. **`install`**: pick a package manager and install dependencies.
//!
//! Declining the confirmation ends the run successfully without writing
//! anything. All interaction goes through a `Prompter`, so `run_init` can be
//! driven by scripted answers.
//!
//! ## Examples
//!
//! ```bash
//! # Fully interactive
//! nail
//!
//! # Non-interactive, from a local template
//! nail init --template local:./my-template --name "demo app" --author owl_aford \
//!     --no-e2e --yes --installer skip
//! ```
//!
use crate::common::ui::{self, prompts::Prompter, prompts::TerminalPrompter};
use crate::core::config;
use crate::core::context::InvocationContext;
use crate::core::error::Result;
use anyhow::Context;
use clap::Args;
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};

pub mod answers;
pub mod fetch;
pub mod install;
pub mod materialize;

use answers::AnswerPresets;
use install::InstallerChoice;

pub const CANCELLED_MESSAGE: &str = "Generation cancelled.";

/// Arguments for `nail init`. Every answer can be given up front, which makes
/// the command usable without a terminal.
#[derive(Args, Debug, Default, Clone)]
pub struct InitArgs {
    /// Template to scaffold from: `owner/name[#ref]`, `github:`, `gitlab:`,
    /// `bitbucket:`, `direct:<url>` or `local:<path>`.
    #[arg(long, env = "NAIL_TEMPLATE", value_name = "REF")]
    pub template: Option<String>,

    /// Directory the template is staged in (default: `tmp` next to the executable).
    #[arg(long, env = "NAIL_STAGING_DIR", value_name = "DIR")]
    pub staging_dir: Option<PathBuf>,

    /// Parent directory of the new project (default: current directory).
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Project name; spaces become hyphens.
    #[arg(long)]
    pub name: Option<String>,

    /// Author name (4-16 of letters, digits, `_`, `-`).
    #[arg(long)]
    pub author: Option<String>,

    /// Keep the end-to-end testing setup.
    #[arg(long, conflicts_with = "no_e2e")]
    pub e2e: bool,

    /// Drop the end-to-end testing setup.
    #[arg(long)]
    pub no_e2e: bool,

    /// Generate without asking for confirmation.
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Package manager to install with, or `skip`.
    #[arg(long, value_name = "NAME")]
    pub installer: Option<String>,
}

impl InitArgs {
    pub fn presets(&self) -> AnswerPresets {
        let e2e = match (self.e2e, self.no_e2e) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        AnswerPresets {
            name: self.name.clone(),
            author: self.author.clone(),
            e2e,
            assume_yes: self.yes,
            installer: self.installer.clone(),
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Generated {
        output_dir: PathBuf,
        installer: InstallerChoice,
    },
    Cancelled,
}

pub async fn handle_init(args: InitArgs) -> Result<()> {
    info!("Handling init command...");
    let presets = args.presets();
    let ctx = build_context(&args)?;
    debug!("Invocation context: {:?}", ctx);

    let prompter = TerminalPrompter::new();
    match run_init(&ctx, &prompter, &presets).await? {
        InitOutcome::Generated {
            output_dir,
            installer,
        } => info!("Generated {:?} (installer: {:?})", output_dir, installer),
        InitOutcome::Cancelled => info!("Generation cancelled by the user"),
    }
    Ok(())
}

fn build_context(args: &InitArgs) -> Result<InvocationContext> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let working_dir = match &args.output {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => cwd.join(dir),
        None => cwd,
    };

    let mut cfg = config::load_config(&working_dir).context("Failed to load nail configuration")?;
    if let Some(template) = &args.template {
        debug!("Template overridden on the command line: {}", template);
        cfg.template.source = template.clone();
    }
    InvocationContext::new(cfg, working_dir, args.staging_dir.clone())
}

/// Runs the fetch, prompt, materialize and install stages in order.
pub async fn run_init(
    ctx: &InvocationContext,
    prompter: &dyn Prompter,
    presets: &AnswerPresets,
) -> Result<InitOutcome> {
    fetch::fetch_template(&ctx.template, &ctx.staging_dir).await?;

    let identity = answers::collect_identity(prompter, presets)?;
    let preset_installer = presets
        .installer
        .as_deref()
        .map(|name| install::preset_installer(&ctx.install, name))
        .transpose()?;
    let output_dir = ctx.output_path(&identity.project_name);
    if !answers::confirm_generation(prompter, &output_dir, presets.assume_yes)? {
        println!("{}", ui::advice(CANCELLED_MESSAGE));
        return Ok(InitOutcome::Cancelled);
    }

    materialize::materialize(ctx, &identity, &output_dir)?;

    let installer = match preset_installer {
        Some(choice) => choice,
        None => {
            let candidates = install::installer_candidates(&ctx.install);
            install::choose_installer(prompter, &candidates)?
        }
    };
    match &installer {
        InstallerChoice::Manager(manager) => {
            install::install(manager, &output_dir);
        }
        InstallerChoice::Skip => {
            let hint = install::manual_install_hint(&ctx.install.default_manager);
            println!("{}", ui::hint(&hint));
        }
    }

    Ok(InitOutcome::Generated {
        output_dir,
        installer,
    })
}
