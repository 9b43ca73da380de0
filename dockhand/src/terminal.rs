//! Terminal prompts backed by `dialoguer`.
//!
//! Prompt failures (Ctrl+C, closed stdin) are reported as
//! [`DockError::Interrupted`] so every flow unwinds as a clean cancellation.

use dialoguer::{Confirm, Input, MultiSelect, Password, Select};

use dockhand_core::dock_println;
use dockhand_core::error::{DockError, Result};
use dockhand_engine::UserInteraction;

/// Interactive prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalInteraction;

impl TerminalInteraction {
    pub fn new() -> Self {
        Self
    }
}

impl UserInteraction for TerminalInteraction {
    fn select_one(&self, prompt: &str, options: &[String]) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact()
            .map_err(|_| DockError::Interrupted)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|_| DockError::Interrupted)
    }

    fn progress(&self, message: &str) {
        dock_println!("{}", message);
    }
}

/// Free-text input.
pub fn input_text(prompt: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|_| DockError::Interrupted)
}

/// Hidden input for passwords and tokens.
pub fn input_password(prompt: &str) -> Result<String> {
    Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|_| DockError::Interrupted)
}

/// Checkbox selection; returns the chosen indexes.
pub fn multi_select(prompt: &str, options: &[String]) -> Result<Vec<usize>> {
    MultiSelect::new()
        .with_prompt(prompt)
        .items(options)
        .interact()
        .map_err(|_| DockError::Interrupted)
}
