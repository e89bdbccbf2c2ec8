//! Test helpers, compiled for tests and behind the `test-utils` feature.

use crate::prompt::Prompt;
use anyhow::{Result, bail};
use std::collections::VecDeque;

/// A [`Prompt`] that replays a script instead of reading a terminal.
///
/// Selections are scripted by item text, not index, so tests stay
/// readable and break loudly when a menu changes. Output lines are
/// collected into `transcript` for assertions.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    inputs: VecDeque<String>,
    passwords: VecDeque<String>,
    selections: VecDeque<String>,
    confirms: VecDeque<bool>,
    pub transcript: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_input(&mut self, value: &str) -> &mut Self {
        self.inputs.push_back(value.to_string());
        self
    }

    pub fn push_password(&mut self, value: &str) -> &mut Self {
        self.passwords.push_back(value.to_string());
        self
    }

    /// Script the next menu choice by its item text.
    pub fn push_select(&mut self, item: &str) -> &mut Self {
        self.selections.push_back(item.to_string());
        self
    }

    pub fn push_confirm(&mut self, answer: bool) -> &mut Self {
        self.confirms.push_back(answer);
        self
    }

    pub fn transcript_contains(&self, needle: &str) -> bool {
        self.transcript.iter().any(|l| l.contains(needle))
    }
}

impl Prompt for ScriptedPrompt {
    fn input(&mut self, label: &str) -> Result<String> {
        match self.inputs.pop_front() {
            Some(value) => Ok(value),
            None => bail!("no scripted input left for '{label}'"),
        }
    }

    fn password(&mut self, label: &str) -> Result<String> {
        match self.passwords.pop_front() {
            Some(value) => Ok(value),
            None => bail!("no scripted password left for '{label}'"),
        }
    }

    fn select(&mut self, label: &str, items: &[String]) -> Result<usize> {
        let Some(wanted) = self.selections.pop_front() else {
            bail!("no scripted selection left for '{label}' (items: {items:?})");
        };
        match items.iter().position(|item| *item == wanted) {
            Some(index) => Ok(index),
            None => bail!("scripted selection '{wanted}' not among {items:?} for '{label}'"),
        }
    }

    fn confirm(&mut self, label: &str) -> Result<bool> {
        match self.confirms.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("no scripted confirmation left for '{label}'"),
        }
    }

    fn line(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_matches_by_item_text() {
        let mut prompt = ScriptedPrompt::new();
        prompt.push_select("Logout");
        let items = ["Manage Grades".to_string(), "Logout".to_string()];
        assert_eq!(prompt.select("Dashboard", &items).unwrap(), 1);
    }

    #[test]
    fn test_select_unknown_item_fails() {
        let mut prompt = ScriptedPrompt::new();
        prompt.push_select("Missing");
        let items = ["Back".to_string()];
        assert!(prompt.select("Menu", &items).is_err());
    }

    #[test]
    fn test_exhausted_script_fails() {
        let mut prompt = ScriptedPrompt::new();
        assert!(prompt.input("Username").is_err());
        assert!(prompt.confirm("Sure?").is_err());
    }

    #[test]
    fn test_transcript_records_lines() {
        let mut prompt = ScriptedPrompt::new();
        prompt.line("Grades saved successfully!");
        assert!(prompt.transcript_contains("saved successfully"));
    }
}
