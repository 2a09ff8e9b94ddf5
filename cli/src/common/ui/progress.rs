//! # nail Progress Indicators (`common::ui::progress`)
//!
//! File: cli/src/common/ui/progress.rs
//!
//! Spinner shown while a long-running step (the template download) is in
//! flight. indicatif hides the spinner automatically when stderr is not a
//! terminal, so piped and test output stays clean.
//!
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Starts a ticking spinner with `message`. Call `finish_and_clear` when done.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
