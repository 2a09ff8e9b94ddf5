//! # nail Init: Project Materialization
//!
//! File: cli/src/commands/init/materialize.rs
//!
//! ## Overview
//!
//! Turns the staged template into the user's project:
//!
//! 1. Copies the staged tree into the target directory, skipping the
//!    exclusion list (manifest, license, CI config and, when e2e support was
//!    declined, the e2e directory and its config file).
//! 2. Loads the template manifest, sets `name` and `author`, and strips the
//!    e2e dependencies and scripts when e2e support was declined.
//! 3. Writes the manifest into the target directory as two-space indented JSON.
//!
//! Existing files in the target directory are overwritten. Files that are not
//! part of the template are left alone.
//!
use crate::commands::init::answers::Identity;
use crate::common::fs::copy::copy_tree_excluding;
use crate::common::ui;
use crate::core::context::InvocationContext;
use crate::core::error::Result;
use crate::core::manifest::Manifest;
use anyhow::Context;
use std::env;
use std::path::Path;
use tracing::{debug, info};

pub const GENERATED_MESSAGE: &str = "The project has been generated successfully!";

const DEV_DEPENDENCIES_SECTION: &str = "devDependencies";
const SCRIPTS_SECTION: &str = "scripts";

/// Builds the project in `output_dir` from the staged template.
pub fn materialize(ctx: &InvocationContext, identity: &Identity, output_dir: &Path) -> Result<()> {
    info!(
        "Materializing '{}' into {:?} (e2e: {})",
        identity.project_name, output_dir, identity.include_e2e
    );

    let manifest = patched_manifest(ctx, identity)?;

    let exclusions = ctx.exclusions(identity.include_e2e);
    debug!("Exclusions: {:?}", exclusions.iter().collect::<Vec<_>>());
    let copied = copy_tree_excluding(&ctx.staging_dir, output_dir, &exclusions)
        .context("Failed to copy the template into the project directory")?;
    info!("Copied {} template file(s)", copied);

    manifest.write(&output_dir.join(&ctx.materialize.manifest))?;

    println!("{}", ui::success(GENERATED_MESSAGE));
    print_next_steps(output_dir);
    Ok(())
}

/// Loads the staged manifest and applies the user's answers to it.
fn patched_manifest(ctx: &InvocationContext, identity: &Identity) -> Result<Manifest> {
    let mut manifest = Manifest::load(&ctx.manifest_path())?;
    debug!(
        "Renaming template manifest {:?} to '{}' (entered as '{}')",
        manifest.get("name"),
        identity.project_name,
        identity.raw_name
    );
    manifest.set_str("name", &identity.project_name);
    manifest.set_str("author", &identity.author);

    if !identity.include_e2e {
        let removed = manifest.remove_section_keys(DEV_DEPENDENCIES_SECTION, &ctx.e2e.dependencies)
            + manifest.remove_section_keys(SCRIPTS_SECTION, &ctx.e2e.scripts);
        debug!("Stripped {} e2e manifest entries", removed);
    }
    Ok(manifest)
}

fn print_next_steps(output_dir: &Path) {
    let display_path = env::current_dir()
        .ok()
        .and_then(|cwd| pathdiff::diff_paths(output_dir, cwd))
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| output_dir.display().to_string());
    println!("{}", ui::hint(&format!("  Location: {}", output_dir.display())));
    println!("{}", ui::hint(&format!("  Next: cd {}", display_path)));
}
