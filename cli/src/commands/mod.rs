//! # nail Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the command handlers of the nail CLI and makes them
//! accessible to the entry point (`main.rs`).
//!
//! ## Command Groups
//!
//! - `init`: scaffold a new project from a template (also the default command)
//!
//! Each command defines its own arguments structure and a `handle_*` function
//! that runs it.
//!

/// Scaffolds a project: fetch template, prompt, materialize, install.
pub mod init;
