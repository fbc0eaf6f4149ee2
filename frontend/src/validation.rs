use thiserror::Error;

/// Reasons a form submission is refused before any request is made.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a search keyword")]
    EmptyKeyword,

    #[error("Please enter a question")]
    EmptyQuery,

    #[error("A request is already in progress")]
    Busy,
}

pub fn require_text(raw: &str, when_empty: InputError) -> Result<String, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(when_empty)
    } else {
        Ok(trimmed.to_string())
    }
}
