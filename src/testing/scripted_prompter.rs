use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Prompter;

/// One scripted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Accept whatever default the question offers.
    Default,
    Text(String),
    Confirm(bool),
    Number(u16),
    /// Simulate Ctrl-C.
    Cancel,
}

/// Prompter replaying a fixed list of answers and recording the questions.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<(String, String)>>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self { answers: RefCell::new(answers.into_iter().collect()), asked: RefCell::default() }
    }

    /// `(prompt, default)` pairs in the order they were asked.
    pub fn asked(&self) -> Vec<(String, String)> {
        self.asked.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, prompt: &str, default: String) -> Result<Answer, AppError> {
        self.asked.borrow_mut().push((prompt.to_string(), default));
        match self.answers.borrow_mut().pop_front() {
            Some(Answer::Cancel) => Err(AppError::PromptCancelled),
            Some(answer) => Ok(answer),
            None => Err(AppError::Prompt(format!("no scripted answer for '{prompt}'"))),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_text(&self, prompt: &str, default: &str) -> Result<String, AppError> {
        match self.next(prompt, default.to_string())? {
            Answer::Default => Ok(default.to_string()),
            Answer::Text(value) => Ok(value),
            other => Err(AppError::Prompt(format!("expected text for '{prompt}', got {other:?}"))),
        }
    }

    fn ask_confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError> {
        match self.next(prompt, default.to_string())? {
            Answer::Default => Ok(default),
            Answer::Confirm(value) => Ok(value),
            other => Err(AppError::Prompt(format!("expected yes/no for '{prompt}', got {other:?}"))),
        }
    }

    fn ask_number(&self, prompt: &str, default: u16) -> Result<u16, AppError> {
        match self.next(prompt, default.to_string())? {
            Answer::Default => Ok(default),
            Answer::Number(value) => Ok(value),
            other => Err(AppError::Prompt(format!("expected number for '{prompt}', got {other:?}"))),
        }
    }
}
