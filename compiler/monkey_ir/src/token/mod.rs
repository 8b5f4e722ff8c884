//! Tokens produced by the lexer.

mod kind;

pub use kind::TokenKind;

use crate::Span;

/// A token with its kind, exact source text and location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text. For string literals, the contents between the quotes.
    pub literal: String,
    pub span: Span,
}

impl Token {
    /// Create a new token.
    #[inline]
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// End-of-input token positioned at `offset`.
    #[inline]
    pub fn eof(offset: u32) -> Self {
        Token {
            kind: TokenKind::Eof,
            literal: String::new(),
            span: Span::point(offset),
        }
    }
}
