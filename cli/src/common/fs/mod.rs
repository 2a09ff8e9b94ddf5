//! # nail Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! This module groups the filesystem helpers used while staging a template and
//! materializing a project from it.
//!
//! ## Architecture
//!
//! - **`copy`**: The `ExclusionList` and the filtered, link-following tree copy used by
//!   the materializer, plus a plain contents copy used to stage local templates.
//! - **`io`**: Directory-level helpers: `ensure_dir_exists` and `reset_dir`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::{copy, io};
//! use std::path::Path;
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! io::reset_dir(Path::new("./tmp"))?;
//!
//! let mut exclusions = copy::ExclusionList::new();
//! exclusions.add("package.json");
//! copy::copy_tree_excluding(Path::new("./tmp"), Path::new("./demo-app"), &exclusions)?;
//! # Ok(())
//! # }
//! ```
//!

/// Filtered tree copy (`copy_tree_excluding`) and local template staging (`copy_directory_contents`).
pub mod copy;
/// Directory helpers (`ensure_dir_exists`, `reset_dir`).
pub mod io;
