//! # nail Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure used by the command
//! handlers: configuration, errors, the per-run invocation context, template
//! references and manifest editing.
//!
//! ## Architecture
//!
//! - `config`: Configuration loading, merging, and validation
//! - `context`: The immutable `InvocationContext` threaded through each stage
//! - `error`: Error types and the crate-wide `Result` alias
//! - `manifest`: Reading and rewriting the template's `package.json`
//! - `template_ref`: Parsing template references into download sources
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{NailError, Result}; // For error handling
//! use crate::core::manifest::Manifest; // For stamping package.json
//! ```
//!
pub mod config;
pub mod context;
pub mod error;
pub mod manifest;
pub mod template_ref;
