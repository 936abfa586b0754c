use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
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

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Only I/O failures stop a pass; everything the scanner reports while
    /// reading tokens is recoverable.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::StreamOpenFailure { .. } | ErrorImpl::OutputFailure { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::IdentifierTooLong { .. } => "IdentifierTooLong",
            ErrorImpl::NumberTooLong { .. } => "NumberTooLong",
            ErrorImpl::NumberOutOfRange { .. } => "NumberOutOfRange",
            ErrorImpl::InvalidCharConstant => "InvalidCharConstant",
            ErrorImpl::InvalidSymbol { .. } => "InvalidSymbol",
            ErrorImpl::StreamOpenFailure { .. } => "StreamOpenFailure",
            ErrorImpl::OutputFailure { .. } => "OutputFailure",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Close the comment with `*)`"))
            }
            ErrorImpl::IdentifierTooLong { max } => ErrorTip::Suggestion(format!(
                "Identifiers may be at most {} characters long",
                max
            )),
            ErrorImpl::NumberTooLong { max } => ErrorTip::Suggestion(format!(
                "Numbers may be at most {} digits long",
                max
            )),
            ErrorImpl::NumberOutOfRange { lexeme } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                lexeme
            )),
            ErrorImpl::InvalidCharConstant => ErrorTip::Suggestion(String::from(
                "A char constant is exactly one character between single quotes, e.g. 'a'",
            )),
            ErrorImpl::InvalidSymbol { .. } => ErrorTip::None,
            ErrorImpl::StreamOpenFailure { reason, .. } | ErrorImpl::OutputFailure { reason } => {
                ErrorTip::Suggestion(reason.clone())
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}:{}",
            self.position.line, self.position.column, self.internal_error
        )
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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("end of comment expected")]
    UnterminatedComment,
    #[error("identifier too long")]
    IdentifierTooLong { max: usize },
    #[error("number too long")]
    NumberTooLong { max: usize },
    #[error("number out of range: {lexeme:?}")]
    NumberOutOfRange { lexeme: String },
    #[error("invalid char constant")]
    InvalidCharConstant,
    #[error("invalid symbol: {symbol:?}")]
    InvalidSymbol { symbol: char },
    #[error("cannot read input file {path:?}")]
    StreamOpenFailure { path: String, reason: String },
    #[error("cannot write token output")]
    OutputFailure { reason: String },
}
