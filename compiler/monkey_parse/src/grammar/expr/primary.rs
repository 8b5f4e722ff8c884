//! Prefix productions: literals, unary operators, grouping, `if` and `fn`.

use std::rc::Rc;

use monkey_ir::{Expr, ExprKind, Identifier, PrefixOp, Token, TokenKind};

use super::Precedence;
use crate::{ParseErrorKind, Parser};

impl<I: Iterator<Item = Token>> Parser<I> {
    pub(super) fn identifier(&self) -> Expr {
        let tok = self.cursor.current();
        Expr::new(ExprKind::Ident(tok.literal.clone()), tok.span)
    }

    pub(super) fn integer_literal(&mut self) -> Option<Expr> {
        let tok = self.cursor.current();
        let span = tok.span;
        if let Ok(value) = tok.literal.parse::<i64>() {
            Some(Expr::new(ExprKind::Int(value), span))
        } else {
            let literal = tok.literal.clone();
            self.error(ParseErrorKind::InvalidInteger(literal), span);
            None
        }
    }

    pub(super) fn string_literal(&self) -> Expr {
        let tok = self.cursor.current();
        Expr::new(ExprKind::Str(tok.literal.clone()), tok.span)
    }

    pub(super) fn boolean_literal(&self) -> Expr {
        let value = self.cursor.check(TokenKind::True);
        Expr::new(ExprKind::Bool(value), self.cursor.current_span())
    }

    /// `!x` or `-x`. The operand binds at `Prefix`, so `-a * b` is `(-a) * b`.
    pub(super) fn prefix_expression(&mut self, op: PrefixOp) -> Option<Expr> {
        let start = self.cursor.current_span();
        self.cursor.advance();
        let operand = self.parse_expression(Precedence::Prefix)?;
        let span = start.merge(operand.span);
        Some(Expr::new(
            ExprKind::Prefix {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    /// `( EXPR )`. The parentheses leave no node of their own.
    pub(super) fn grouped_expression(&mut self) -> Option<Expr> {
        let start = self.cursor.current_span();
        self.cursor.advance();
        let mut inner = self.parse_expression(Precedence::Lowest)?;
        let end = self.expect_peek(TokenKind::RParen)?;
        inner.span = start.merge(end);
        Some(inner)
    }

    /// `if ( COND ) { ... } [else { ... }]`
    ///
    /// The condition is parsed starting at the `(`, as a grouped expression.
    pub(super) fn if_expression(&mut self) -> Option<Expr> {
        let start = self.cursor.current_span();
        self.expect_peek(TokenKind::LParen)?;
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.block();

        let alternative = if self.cursor.peek_is(TokenKind::Else) {
            self.cursor.advance();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.block())
        } else {
            None
        };

        let span = start.merge(self.cursor.current_span());
        Some(Expr::new(
            ExprKind::If {
                condition: Box::new(condition),
                consequence,
                alternative,
            },
            span,
        ))
    }

    /// `fn ( PARAMS ) { ... }`
    pub(super) fn function_literal(&mut self) -> Option<Expr> {
        let start = self.cursor.current_span();
        self.expect_peek(TokenKind::LParen)?;
        let params = self.function_params()?;
        self.expect_peek(TokenKind::LBrace)?;
        let body = self.block();
        let span = start.merge(body.span);
        Some(Expr::new(
            ExprKind::Function {
                params: Rc::from(params),
                body: Rc::new(body),
            },
            span,
        ))
    }

    /// Comma-separated identifiers, entered on `(` and leaving on `)`.
    fn function_params(&mut self) -> Option<Vec<Identifier>> {
        let mut params = Vec::new();
        while !self.cursor.peek_is(TokenKind::RParen) {
            let span = self.expect_peek(TokenKind::Ident)?;
            params.push(Identifier::new(self.cursor.current().literal.clone(), span));
            if !self.cursor.peek_is(TokenKind::Comma) {
                break;
            }
            self.cursor.advance();
        }
        self.expect_peek(TokenKind::RParen)?;
        Some(params)
    }
}
