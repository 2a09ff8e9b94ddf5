//! # nail UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal presentation for the scaffolder.
//!
//! - **`progress`**: the download spinner (`indicatif`).
//! - **`prompts`**: the `Prompter` trait and its `dialoguer` implementation.
//! - Status line helpers (this module): colored one-line messages via `console`.
//!
//! Status lines are plain strings so callers decide between stdout and stderr,
//! and tests can assert on them. `console` drops the color codes automatically
//! when the stream is not a terminal.
//!
use console::style;

pub mod progress;
pub mod prompts;

/// Green line for completed steps.
pub fn success(message: &str) -> String {
    style(message).green().to_string()
}

/// Red line for failures.
pub fn failure(message: &str) -> String {
    style(message).red().to_string()
}

/// Yellow line for suggestions after a failure.
pub fn advice(message: &str) -> String {
    style(message).yellow().to_string()
}

/// Cyan line for follow-up instructions.
pub fn hint(message: &str) -> String {
    style(message).cyan().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lines_keep_text() {
        for render in [success, failure, advice, hint] {
            let line = render("The project has been generated successfully!");
            assert!(line.contains("The project has been generated successfully!"));
        }
    }
}
