//! User input and interaction handling.

use dialoguer::Input;

use crate::error::{Error, Result};

/// Trait for interactive user input, kept behind a seam so the interactive
/// path can be exercised with a stub in tests.
pub trait Prompter {
    /// Asks the user for a line of text input.
    fn input(&self, message: &str) -> Result<String>;
}

/// Dialoguer-based interactive prompter.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, message: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
