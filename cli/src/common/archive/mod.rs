//! # nail Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! Archive handling for downloaded templates. Hosting services deliver
//! repository snapshots as gzipped tarballs; the `tar` submodule unpacks them
//! into the staging directory.
//!
//! ```rust
//! use crate::common::archive;
//! use std::path::Path;
//!
//! # fn run(bytes: &[u8]) -> anyhow::Result<()> {
//! // Drop the `<repo>-<branch>/` directory every hosted snapshot is wrapped in.
//! archive::tar::unpack_tar_gz(bytes, Path::new("./tmp"), 1)?;
//! # Ok(())
//! # }
//! ```
//!

pub mod tar;
