//! Parse error types.
//!
//! The `Display` of a [`ParseError`] is the diagnostic text shown to users,
//! so the message formats here are stable.

use monkey_ir::{Span, TokenKind};
use thiserror::Error;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A required token was not next in the stream.
    #[error("expected next token to be {expected}, but got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    /// The token cannot start an expression.
    #[error("no prefix parse function for {0}")]
    NoPrefixParse(TokenKind),
    /// Integer literal outside the `i64` range.
    #[error("could not parse \"{0}\" as integer")]
    InvalidInteger(String),
}

/// Parse error with the location it was detected at.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }
}
