use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    /// Byte offset into the source the error refers to.
    pub fn offset(&self) -> usize {
        self.position.0
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::InvalidCharacter { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::FileNotFound { .. } => "FileNotFound",
            ErrorImpl::FileReadError { .. } => "FileReadError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { character } => {
                ErrorTip::Suggestion(format!("Invalid character `{}`", character.escape_debug()))
            }
            ErrorImpl::FileNotFound { .. } => ErrorTip::None,
            ErrorImpl::FileReadError { message, .. } => ErrorTip::Suggestion(message.clone()),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => {
                write!(f, "{} at position {}", self.internal_error, self.position.0)
            }
            _ => write!(f, "{}", self.internal_error),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Invalid character")]
    InvalidCharacter { character: char },
    #[error("File not found: {path}")]
    FileNotFound { path: String },
    #[error("Failed to read {path}: {message}")]
    FileReadError { path: String, message: String },
}
