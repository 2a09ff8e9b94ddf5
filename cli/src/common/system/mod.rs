//! # nail System Utilities Module (`common::system`)
//!
//! File: cli/src/common/system/mod.rs
//!
//! ## Overview
//!
//! Host inspection. Currently limited to finding out which package managers
//! are installed so the installer prompt only offers working choices.
//!
//! - **`tools`**: `is_available` / `detect_available` probe tools via `--version`.
//!
//! ```rust
//! use crate::common::system::tools;
//!
//! let managers = tools::detect_available(&["yarn", "cnpm", "pnpm"]);
//! println!("Installed alternatives: {:?}", managers);
//! ```
//!

pub mod tools;
