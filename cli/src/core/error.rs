//! # nail Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the nail scaffolder.
//! Each pipeline stage (fetch, prompt, materialize, install) reports failures
//! through these variants so the entry point can print a single, readable
//! message.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `NailError`: A custom error enum using `thiserror` for the specific failure kinds
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible propagation with context
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !manifest_path.is_file() {
//!     anyhow::bail!(NailError::Manifest(format!(
//!         "Template has no manifest at {}",
//!         manifest_path.display()
//!     )));
//! }
//!
//! // Check for a specific failure kind further up the stack
//! let fetch_failed = err
//!     .downcast_ref::<NailError>()
//!     .is_some_and(|e| matches!(e, NailError::Fetch(_)));
//! ```
//!
use thiserror::Error;

/// Custom error type for the nail application.
#[derive(Error, Debug)]
pub enum NailError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Invalid template reference '{reference}': {reason}")]
    TemplateRef { reference: String, reason: String },

    #[error("Template download failed: {0}")]
    Fetch(String),

    #[error("Template archive error: {0}")]
    Archive(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Invalid {field}: '{value}'. {hint}")]
    Validation {
        field: &'static str,
        value: String,
        hint: &'static str,
    },

    #[error("Prompt failed: {source}")]
    Prompt {
        #[from]
        source: dialoguer::Error,
    },

    #[error("External command failed: {cmd}, Status: {status}")]
    ExternalCommand { cmd: String, status: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
