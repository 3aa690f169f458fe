//! Terminal prompting capability.
//!
//! The wizard talks to the terminal through the [`Prompter`] trait, so the
//! interactive surface stays a replaceable collaborator: production code
//! supplies the `dialoguer`-backed [`TermPrompter`], tests supply a
//! scripted stub.

use crate::error::Result;

/// Capability to ask the user for strings and yes/no confirmations.
pub trait Prompter {
    /// Ask for a line of text, offering `default` as the pre-filled answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal interaction fails.
    fn input(&self, title: &str, default: &str) -> Result<String>;

    /// Ask a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal interaction fails.
    fn confirm(&self, title: &str, default: bool) -> Result<bool>;
}

/// Interactive prompter backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn input(&self, title: &str, default: &str) -> Result<String> {
        let answer = dialoguer::Input::<String>::new()
            .with_prompt(title)
            .default(default.to_string())
            .interact_text()?;
        Ok(answer)
    }

    fn confirm(&self, title: &str, default: bool) -> Result<bool> {
        let answer = dialoguer::Confirm::new()
            .with_prompt(title)
            .default(default)
            .interact()?;
        Ok(answer)
    }
}
