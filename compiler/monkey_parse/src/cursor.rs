//! Token cursor with two-token lookahead.
//!
//! Holds `current` and `peek` and refills `peek` from the underlying
//! iterator on every advance. Once the iterator is exhausted the cursor
//! keeps producing `Eof` tokens, so lookahead is always defined.

use monkey_ir::{Span, Token, TokenKind};
use tracing::trace;

/// Cursor over a pull-based token stream.
pub struct Cursor<I> {
    tokens: I,
    current: Token,
    peek: Token,
}

impl<I: Iterator<Item = Token>> Cursor<I> {
    /// Create a cursor, reading the first two tokens.
    pub fn new(mut tokens: I) -> Self {
        let current = tokens.next().unwrap_or_else(|| Token::eof(0));
        let peek = tokens
            .next()
            .unwrap_or_else(|| Token::eof(current.span.end));
        Cursor {
            tokens,
            current,
            peek,
        }
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current.span
    }

    #[inline]
    pub fn peek(&self) -> &Token {
        &self.peek
    }

    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Check if the current token matches the given kind.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Check if the peek token matches the given kind.
    #[inline]
    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Check if the current token is end of input.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Shift `peek` into `current` and pull the next token.
    pub fn advance(&mut self) {
        let next = self
            .tokens
            .next()
            .unwrap_or_else(|| Token::eof(self.peek.span.end));
        self.current = std::mem::replace(&mut self.peek, next);
        trace!(
            span = %self.current.span,
            kind = %self.current.kind,
            "advance"
        );
    }
}
