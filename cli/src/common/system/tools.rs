//! # nail Tool Detection (`common::system::tools`)
//!
//! File: cli/src/common/system/tools.rs
//!
//! Checks which external command-line tools are installed by running
//! `<tool> --version` with all output suppressed. A tool that cannot be
//! started, or that exits unsuccessfully, is simply reported as unavailable.
//!
use crate::common::process;
use tracing::{debug, info};

const VERSION_FLAG: &str = "--version";

/// Returns true when `<name> --version` runs and exits successfully.
pub fn is_available(name: &str) -> bool {
    let available = process::succeeds_quietly(name, &[VERSION_FLAG]);
    debug!("Tool '{}' available: {}", name, available);
    available
}

/// Filters `candidates` down to the installed ones, preserving order.
pub fn detect_available<S: AsRef<str>>(candidates: &[S]) -> Vec<String> {
    let found: Vec<String> = candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| is_available(name))
        .map(str::to_string)
        .collect();
    info!("Detected tools: {:?}", found);
    found
}
