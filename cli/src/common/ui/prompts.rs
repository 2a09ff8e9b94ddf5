//! # nail Interactive Prompts (`common::ui::prompts`)
//!
//! File: cli/src/common/ui/prompts.rs
//!
//! ## Overview
//!
//! The `Prompter` trait is the seam between the scaffolding flow and the
//! terminal. It offers the three interactions the flow needs:
//!
//! - **`input`**: free text checked by a validator; the prompt is shown again
//!   until the validator accepts the answer.
//! - **`confirm`**: a yes/no question.
//! - **`select`**: a single choice from a list.
//!
//! `TerminalPrompter` implements the trait with `dialoguer`. Tests drive the
//! flow through `ScriptedPrompter`, which replays canned answers and records
//! every question it was asked.
//!
use crate::core::error::{NailError, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

/// Validator signature shared by every text prompt: `Err` carries the hint shown to the user.
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

pub trait Prompter {
    fn input(&self, prompt: &str, validate: Validator<'_>) -> Result<String>;
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize>;
}

/// `dialoguer`-backed prompts on the controlling terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input(&self, prompt: &str, validate: Validator<'_>) -> Result<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|input: &String| validate(input))
            .interact_text()
            .map_err(NailError::from)?;
        Ok(value)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(NailError::from)?;
        Ok(answer)
    }

    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(NailError::from)?;
        Ok(selection)
    }
}
