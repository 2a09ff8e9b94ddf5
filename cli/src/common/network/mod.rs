//! # nail Network Utilities Module (`common::network`)
//!
//! File: cli/src/common/network/mod.rs
//!
//! ## Overview
//!
//! Outbound network access. nail talks to the network exactly once per run:
//! to download the template archive.
//!
//! - **`http`**: `download(url)` performs the GET with `reqwest` and returns the body.
//!
//! ```rust
//! use crate::common::network::http;
//!
//! # async fn run_example() -> anyhow::Result<()> {
//! let bytes = http::download("https://codeload.github.com/halo-design/nail-cli-template/tar.gz/master").await?;
//! # Ok(())
//! # }
//! ```
//!

pub mod http;
