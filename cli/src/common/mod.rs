//! # nail Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers. Everything here is free of
//! scaffolding policy: which paths to exclude, what to prompt and which
//! manifest keys to strip is decided in `commands::init`; this module only
//! knows how to copy, download, unpack, prompt and run processes.
//!
//! ## Architecture
//!
//! - **`archive`**: Unpacking gzipped tarballs into the staging directory.
//! - **`fs`**: Directory helpers and the exclusion-aware tree copy.
//! - **`network`**: The single HTTP download of a template archive.
//! - **`process`**: Quiet probes and streamed child processes.
//! - **`system`**: Detection of installed tools (package managers).
//! - **`ui`**: Prompts, spinner and colored status lines.
//!

/// Unpacking of downloaded template archives.
pub mod archive;
/// Filesystem helpers (copying, directory management).
pub mod fs;
/// HTTP download of template archives.
pub mod network;
/// Child process helpers.
pub mod process;
/// Host tool detection.
pub mod system;
/// Terminal prompts, spinner and status output.
pub mod ui;
