//! Expression parsing.
//!
//! Pratt loop: parse a prefix production for the current token, then keep
//! folding infix productions while the peek token binds tighter than the
//! caller's minimum precedence. Equal precedence stops the loop, which makes
//! every binary operator left-associative.

mod collections;
mod operators;
mod primary;

pub use operators::Precedence;

use monkey_ir::{Expr, ExprKind, Token, TokenKind};
use monkey_stack::ensure_sufficient_stack;

use crate::{ParseErrorKind, Parser};
use operators::{match_prefix_op, InfixRule};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parse an expression whose operators all bind tighter than `min`.
    ///
    /// Entered with the cursor on the expression's first token; leaves it on
    /// the last token consumed. Returns `None` after recording a diagnostic.
    pub(crate) fn parse_expression(&mut self, min: Precedence) -> Option<Expr> {
        ensure_sufficient_stack(|| {
            let mut left = self.parse_prefix()?;

            // `;` and every other non-operator have no rule and end the loop.
            while let Some(rule) = InfixRule::for_token(self.cursor.peek_kind())
                .filter(|rule| min < rule.precedence())
            {
                self.cursor.advance();
                left = self.parse_infix(rule, left)?;
            }

            Some(left)
        })
    }

    fn parse_prefix(&mut self) -> Option<Expr> {
        let kind = self.cursor.current_kind();
        if let Some(op) = match_prefix_op(kind) {
            return self.prefix_expression(op);
        }
        match kind {
            TokenKind::Ident => Some(self.identifier()),
            TokenKind::Int => self.integer_literal(),
            TokenKind::Str => Some(self.string_literal()),
            TokenKind::True | TokenKind::False => Some(self.boolean_literal()),
            TokenKind::LParen => self.grouped_expression(),
            TokenKind::If => self.if_expression(),
            TokenKind::Function => self.function_literal(),
            TokenKind::LBracket => self.array_literal(),
            TokenKind::LBrace => self.hash_literal(),
            _ => {
                self.error(
                    ParseErrorKind::NoPrefixParse(kind),
                    self.cursor.current_span(),
                );
                None
            }
        }
    }

    /// Continue `left` with the operator the cursor is on.
    fn parse_infix(&mut self, rule: InfixRule, left: Expr) -> Option<Expr> {
        match rule {
            InfixRule::Binary(op) => {
                self.cursor.advance();
                let right = self.parse_expression(rule.precedence())?;
                let span = left.span.merge(right.span);
                Some(Expr::new(
                    ExprKind::Infix {
                        op,
                        left: Box::new(left),
                        right: Box::new(right),
                    },
                    span,
                ))
            }
            InfixRule::Call => self.call_expression(left),
            InfixRule::Index => self.index_expression(left),
        }
    }
}
