//! Interactive prompting.
//!
//! The provisioning flow only ever needs two kinds of question: pick one of
//! several choices, or type a line of text that must pass a validation rule.
//! `Prompter` captures exactly that so the flow can be driven by scripted
//! answers in tests; `DialoguerPrompter` renders it on a real terminal.

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Input, Select};

use crate::error::Result;
use crate::output::OutputConfig;

/// One entry in a single-choice prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub description: Option<String>,
}

impl Choice {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Text shown for this entry in the list.
    pub fn display(&self) -> String {
        match &self.description {
            Some(description) => format!("{} ({})", self.label, description),
            None => self.label.clone(),
        }
    }
}

/// Validation rule for free-text answers; `Err` carries the message shown
/// before asking again.
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Asks the user questions.
pub trait Prompter {
    /// Shows `choices` and returns the index of the one picked.
    fn select(&self, prompt: &str, choices: &[Choice]) -> Result<usize>;

    /// Reads a line of text, asking again until `validate` accepts it.
    fn text(&self, prompt: &str, validate: Validator<'_>) -> Result<String>;
}

/// `Prompter` that renders on the terminal with dialoguer.
pub struct DialoguerPrompter {
    theme: Box<dyn Theme>,
}

impl DialoguerPrompter {
    /// Colorful theme when the output config allows color, plain otherwise.
    pub fn new(output: &OutputConfig) -> Self {
        let theme: Box<dyn Theme> = if output.use_color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self { theme }
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, choices: &[Choice]) -> Result<usize> {
        let items: Vec<String> = choices.iter().map(Choice::display).collect();
        let index = Select::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .items(&items)
            .default(0)
            .interact()?;
        Ok(index)
    }

    fn text(&self, prompt: &str, validate: Validator<'_>) -> Result<String> {
        let answer: String = Input::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .validate_with(|input: &String| validate(input))
            .interact_text()?;
        Ok(answer)
    }
}
