//! The prompt seam between view logic and the terminal.
//!
//! Views talk to the user only through the [`Prompt`] trait, so the same
//! flows run against [`TerminalPrompt`] in the binary and against the
//! scripted implementation in tests.

use anyhow::{Context, Result};
use dialoguer::{Confirm, Input, Password, Select};

/// User interaction surface for the views.
pub trait Prompt {
    /// Free-form text input.
    fn input(&mut self, label: &str) -> Result<String>;

    /// Text input with hidden echo.
    fn password(&mut self, label: &str) -> Result<String>;

    /// Pick one of `items`; returns the chosen index.
    fn select(&mut self, label: &str, items: &[String]) -> Result<usize>;

    /// Yes/no question. Defaults to "no" so that bare Enter never
    /// triggers a destructive action.
    fn confirm(&mut self, label: &str) -> Result<bool>;

    /// Show a line of output.
    fn line(&mut self, text: &str);
}

/// [`Prompt`] implementation backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn input(&mut self, label: &str) -> Result<String> {
        Input::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .with_context(|| format!("failed to read input for '{label}'"))
    }

    fn password(&mut self, label: &str) -> Result<String> {
        Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()
            .with_context(|| format!("failed to read password for '{label}'"))
    }

    fn select(&mut self, label: &str, items: &[String]) -> Result<usize> {
        Select::new()
            .with_prompt(label)
            .items(items)
            .default(0)
            .interact()
            .with_context(|| format!("selection failed for '{label}'"))
    }

    fn confirm(&mut self, label: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(label)
            .default(false)
            .interact()
            .with_context(|| format!("confirmation failed for '{label}'"))
    }

    fn line(&mut self, text: &str) {
        println!("{text}");
    }
}
