// src/ui/terminal.rs
use anyhow::Result;
use crossterm::style::Stylize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

/// The interactive surface the run loop talks to.
pub trait Terminal {
    /// Show `labels` and block until one is chosen. `None` means the prompt was cancelled.
    fn select(&mut self, title: &str, labels: &[String]) -> Result<Option<usize>>;

    /// Read one line of free text.
    fn input(&mut self, prompt: &str) -> Result<String>;

    fn report_error(&mut self, message: &str);
}

pub struct ConsoleTerminal {
    theme: ColorfulTheme,
}

impl ConsoleTerminal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for ConsoleTerminal {
    fn default() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Terminal for ConsoleTerminal {
    fn select(&mut self, title: &str, labels: &[String]) -> Result<Option<usize>> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt(title)
            .items(labels)
            .default(0)
            .interact_opt()?;
        Ok(choice)
    }

    fn input(&mut self, prompt: &str) -> Result<String> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn report_error(&mut self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }
}
