//! Arrays, hashes, calls and index expressions.

use monkey_ir::{Expr, ExprKind, Span, Token, TokenKind};

use super::Precedence;
use crate::Parser;

impl<I: Iterator<Item = Token>> Parser<I> {
    /// `[ EXPR, ... ]`
    pub(super) fn array_literal(&mut self) -> Option<Expr> {
        let start = self.cursor.current_span();
        let (elements, end) = self.expression_list(TokenKind::RBracket)?;
        Some(Expr::new(ExprKind::Array(elements), start.merge(end)))
    }

    /// `{ KEY : VALUE, ... }`, tolerating a trailing comma.
    pub(super) fn hash_literal(&mut self) -> Option<Expr> {
        let start = self.cursor.current_span();
        let mut pairs = Vec::new();

        while !self.cursor.peek_is(TokenKind::RBrace) && !self.cursor.peek_is(TokenKind::Eof) {
            self.cursor.advance();
            let key = self.parse_expression(Precedence::Lowest)?;
            self.expect_peek(TokenKind::Colon)?;
            self.cursor.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.cursor.peek_is(TokenKind::Comma) {
                break;
            }
            self.cursor.advance();
        }

        let end = self.expect_peek(TokenKind::RBrace)?;
        Some(Expr::new(ExprKind::Hash(pairs), start.merge(end)))
    }

    /// `callee ( ARGS )`, entered with the cursor on `(`.
    pub(super) fn call_expression(&mut self, callee: Expr) -> Option<Expr> {
        let (args, end) = self.expression_list(TokenKind::RParen)?;
        let span = callee.span.merge(end);
        Some(Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                args,
            },
            span,
        ))
    }

    /// `collection [ INDEX ]`, entered with the cursor on `[`.
    pub(super) fn index_expression(&mut self, collection: Expr) -> Option<Expr> {
        self.cursor.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        let end = self.expect_peek(TokenKind::RBracket)?;
        let span = collection.span.merge(end);
        Some(Expr::new(
            ExprKind::Index {
                collection: Box::new(collection),
                index: Box::new(index),
            },
            span,
        ))
    }

    /// Comma-separated expressions up to `end`, entered on the opening
    /// delimiter. A trailing comma before `end` is accepted.
    ///
    /// Returns the expressions and the span of the closing delimiter.
    fn expression_list(&mut self, end: TokenKind) -> Option<(Vec<Expr>, Span)> {
        let mut items = Vec::new();

        while !self.cursor.peek_is(end) && !self.cursor.peek_is(TokenKind::Eof) {
            self.cursor.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);

            if !self.cursor.peek_is(TokenKind::Comma) {
                break;
            }
            self.cursor.advance();
        }

        let close = self.expect_peek(end)?;
        Some((items, close))
    }
}
