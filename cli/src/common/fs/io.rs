//! # nail Filesystem Directory Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the directory-level filesystem operations the
//! scaffolder needs around the staging and output directories:
//!
//! - **`ensure_dir_exists`**: Creates a directory (and its parents) if missing and
//!   verifies that an existing path is actually a directory.
//! - **`reset_dir`**: Forcibly empties a directory by erasing and recreating it, so
//!   a previous (possibly failed) run never leaks stale files into a fresh template.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//! use std::path::Path;
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! // Before downloading, guarantee an empty staging directory.
//! io::reset_dir(Path::new("/usr/local/bin/tmp"))?;
//!
//! // Before copying, make sure the project directory exists.
//! io::ensure_dir_exists(Path::new("./demo-app"))?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{NailError, Result}; // Use standard Result and custom Error types
use anyhow::Context; // For adding context to errors
use std::fs; // Standard filesystem module
use std::path::Path; // Filesystem path type
use tracing::{debug, info}; // Logging utilities

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function creates the directory, including
/// any necessary parent directories (similar to `mkdir -p`). If the path
/// already exists but is not a directory, a `NailError::FileSystem` is returned.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(NailError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Erases `path` (if present) and recreates it as an empty directory.
///
/// Parent directories are created as needed. `fs_extra::dir::create` with
/// `erase = true` removes the existing tree before creating the directory.
pub fn reset_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    if path.exists() && !path.is_dir() {
        fs::remove_file(path)
            .with_context(|| format!("Failed to remove file in place of directory {:?}", path))?;
    }
    fs_extra::dir::create(path, true)
        .map_err(|e| anyhow::anyhow!(e).context(format!("Failed to reset directory {:?}", path)))?;
    debug!("Reset directory: {:?}", path);
    Ok(())
}
