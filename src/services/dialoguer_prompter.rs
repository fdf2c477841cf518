use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Terminal prompter. Invalid numeric answers are re-asked by dialoguer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn map_prompt_error(prompt: &str, err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(err) if err.kind() == ErrorKind::Interrupted => AppError::PromptCancelled,
        err => AppError::Prompt(format!("{prompt}: {err}")),
    }
}

impl Prompter for DialoguerPrompter {
    fn ask_text(&self, prompt: &str, default: &str) -> Result<String, AppError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .map_err(|e| map_prompt_error(prompt, e))
    }

    fn ask_confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| map_prompt_error(prompt, e))
    }

    fn ask_number(&self, prompt: &str, default: u16) -> Result<u16, AppError> {
        Input::<u16>::new()
            .with_prompt(prompt)
            .default(default)
            .validate_with(|value: &u16| -> Result<(), &'static str> {
                if *value == 0 { Err("Port must be greater than zero") } else { Ok(()) }
            })
            .interact_text()
            .map_err(|e| map_prompt_error(prompt, e))
    }
}

/// Non-interactive prompter answering every question with its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptDefaultsPrompter;

impl AcceptDefaultsPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for AcceptDefaultsPrompter {
    fn ask_text(&self, _prompt: &str, default: &str) -> Result<String, AppError> {
        Ok(default.to_string())
    }

    fn ask_confirm(&self, _prompt: &str, default: bool) -> Result<bool, AppError> {
        Ok(default)
    }

    fn ask_number(&self, _prompt: &str, default: u16) -> Result<u16, AppError> {
        Ok(default)
    }
}

/// Prompter selected at startup.
#[derive(Debug, Clone, Copy)]
pub enum PrompterKind {
    Interactive(DialoguerPrompter),
    AcceptDefaults(AcceptDefaultsPrompter),
}

impl PrompterKind {
    pub fn new(accept_defaults: bool) -> Self {
        if accept_defaults {
            Self::AcceptDefaults(AcceptDefaultsPrompter::new())
        } else {
            Self::Interactive(DialoguerPrompter::new())
        }
    }
}

impl Prompter for PrompterKind {
    fn ask_text(&self, prompt: &str, default: &str) -> Result<String, AppError> {
        match self {
            Self::Interactive(p) => p.ask_text(prompt, default),
            Self::AcceptDefaults(p) => p.ask_text(prompt, default),
        }
    }

    fn ask_confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError> {
        match self {
            Self::Interactive(p) => p.ask_confirm(prompt, default),
            Self::AcceptDefaults(p) => p.ask_confirm(prompt, default),
        }
    }

    fn ask_number(&self, prompt: &str, default: u16) -> Result<u16, AppError> {
        match self {
            Self::Interactive(p) => p.ask_number(prompt, default),
            Self::AcceptDefaults(p) => p.ask_number(prompt, default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_defaults_returns_defaults() {
        let prompter = PrompterKind::new(true);
        assert_eq!(prompter.ask_text("URL?", "http://share.localhost").unwrap(), "http://share.localhost");
        assert!(!prompter.ask_confirm("Own server?", false).unwrap());
        assert_eq!(prompter.ask_number("Port?", 3000).unwrap(), 3000);
    }

    #[test]
    fn interrupted_prompt_maps_to_cancelled() {
        let err = map_prompt_error(
            "Port?",
            DialoguerError::IO(std::io::Error::from(ErrorKind::Interrupted)),
        );
        assert!(matches!(err, AppError::PromptCancelled));

        let err = map_prompt_error("Port?", DialoguerError::IO(std::io::Error::other("no tty")));
        assert!(err.to_string().contains("Port?"));
    }
}
