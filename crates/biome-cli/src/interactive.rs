//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based input and selection.

use biome_meta::{Chooser, Error, Result};
use dialoguer::{Input, Select};
use std::path::PathBuf;

/// [`Chooser`] that asks on the terminal.
pub struct DialoguerChooser;

impl Chooser for DialoguerChooser {
    fn choose_directory(&mut self, title: &str) -> Result<PathBuf> {
        let answer: String = Input::new()
            .with_prompt(title)
            .interact_text()
            .map_err(|e| Error::chooser(e.to_string()))?;

        // Paths pasted from Explorer come quoted.
        let trimmed = answer.trim().trim_matches('"');
        if trimmed.is_empty() {
            return Err(Error::chooser("no folder entered"));
        }
        Ok(PathBuf::from(trimmed))
    }

    fn choose_from_list(&mut self, prompt: &str, options: &[String]) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact()
            .map_err(|e| Error::chooser(e.to_string()))
    }
}
