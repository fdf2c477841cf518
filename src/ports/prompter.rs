use crate::domain::AppError;

/// Port for asking the user questions.
///
/// Every method receives the default answer so that non-interactive
/// implementations can return it unchanged.
pub trait Prompter {
    /// Ask for a free-text answer.
    fn ask_text(&self, prompt: &str, default: &str) -> Result<String, AppError>;

    /// Ask a yes/no question.
    fn ask_confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError>;

    /// Ask for a positive number.
    fn ask_number(&self, prompt: &str, default: u16) -> Result<u16, AppError>;
}
