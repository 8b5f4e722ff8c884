//! Pratt parser for Monkey.
//!
//! Consumes any `Iterator<Item = Token>` with two tokens of lookahead and
//! produces a [`Program`] plus every diagnostic recorded along the way.
//! Parsing never aborts: a construct that fails records a [`ParseError`]
//! and is dropped, and the statement loop carries on with the next token.
//! Callers must not evaluate a program whose output has errors.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};
pub use grammar::Precedence;

use monkey_ir::{Program, Span, Token, TokenKind};

/// Parser state.
pub struct Parser<I: Iterator<Item = Token>> {
    cursor: Cursor<I>,
    errors: Vec<ParseError>,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Create a new parser, priming `current` and `peek`.
    pub fn new(tokens: impl IntoIterator<IntoIter = I>) -> Self {
        Parser {
            cursor: Cursor::new(tokens.into_iter()),
            errors: Vec::new(),
        }
    }

    /// Parse the whole stream.
    pub fn parse_program(mut self) -> ParseOutput {
        let program = self.program();
        ParseOutput {
            program,
            errors: self.errors,
        }
    }

    /// Require the peek token to be `kind`, advancing onto it.
    ///
    /// On mismatch records a diagnostic and leaves the position unchanged.
    fn expect_peek(&mut self, kind: TokenKind) -> Option<Span> {
        if self.cursor.peek_is(kind) {
            self.cursor.advance();
            Some(self.cursor.current_span())
        } else {
            let found = self.cursor.peek();
            let error = ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    expected: kind,
                    found: found.kind,
                },
                found.span,
            );
            self.errors.push(error);
            None
        }
    }

    #[cold]
    fn error(&mut self, kind: ParseErrorKind, span: Span) {
        self.errors.push(ParseError::new(kind, span));
    }
}

/// Parse result containing the program and any errors.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Diagnostic messages in the order they were recorded.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Parse a token stream into a program.
pub fn parse<T: IntoIterator<Item = Token>>(tokens: T) -> ParseOutput {
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
mod tests;
