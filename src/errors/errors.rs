use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The two classes of failure a parse can end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    LexError,
    SyntaxError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

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

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// 1-based line of the offending token or character.
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// 1-based column of the offending token or character.
    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::MalformedNumber { .. }
            | ErrorImpl::UnterminatedComment => ErrorKind::LexError,
            _ => ErrorKind::SyntaxError,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::InvalidUpdateTarget => "InvalidUpdateTarget",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::EmptyTypeArguments { .. } => "EmptyTypeArguments",
            ErrorImpl::TrailingComma => "TrailingComma",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::MalformedNumber { .. } => ErrorTip::Suggestion(String::from(
                "numbers are decimal digits or `0x` followed by hex digits",
            )),
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("close the comment with `*/`"))
            }
            ErrorImpl::UnexpectedToken { .. } => {
                ErrorTip::Suggestion(String::from("expected an expression"))
            }
            ErrorImpl::UnexpectedTokenDetailed { message, .. } => {
                ErrorTip::Suggestion(message.clone())
            }
            ErrorImpl::ExpectedToken { expected, .. } => {
                ErrorTip::Suggestion(format!("did you forget `{}`?", expected))
            }
            ErrorImpl::InvalidAssignmentTarget => ErrorTip::Suggestion(String::from(
                "only a plain identifier can be assigned to",
            )),
            ErrorImpl::InvalidUpdateTarget => ErrorTip::Suggestion(String::from(
                "`++` and `--` apply to a single identifier",
            )),
            ErrorImpl::UnknownType { .. } => ErrorTip::Suggestion(String::from(
                "expected a primitive type or a generic such as `Promise<number>`",
            )),
            ErrorImpl::EmptyTypeArguments { .. } => {
                ErrorTip::Suggestion(String::from("give at least one type argument"))
            }
            ErrorImpl::TrailingComma => ErrorTip::None,
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "split the construct into smaller declarations",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}: {}",
            self.kind(),
            self.position.line,
            self.position.column,
            self.internal_error
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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token `{token}`")]
    UnrecognisedToken { token: String },
    #[error("malformed number literal `{token}`")]
    MalformedNumber { token: String },
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("unexpected token `{token}`")]
    UnexpectedToken { token: String },
    #[error("unexpected token `{token}`")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("expected `{expected}`, found `{found}`")]
    ExpectedToken { expected: String, found: String },
    #[error("invalid left-hand side in assignment")]
    InvalidAssignmentTarget,
    #[error("invalid operand for update expression")]
    InvalidUpdateTarget,
    #[error("unknown type `{type_}`")]
    UnknownType { type_: String },
    #[error("type `{type_}` has an empty type argument list")]
    EmptyTypeArguments { type_: String },
    #[error("trailing comma is not allowed here")]
    TrailingComma,
    #[error("nesting exceeds the maximum depth of {limit}")]
    NestingTooDeep { limit: usize },
}
