//! Statement parsing.

use monkey_ir::{Block, Identifier, Program, Stmt, StmtKind, Token, TokenKind};
use tracing::debug;

use super::expr::Precedence;
use crate::{ParseErrorKind, Parser};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parse statements until end of input.
    pub(crate) fn program(&mut self) -> Program {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            if let Some(stmt) = self.statement() {
                statements.push(stmt);
            }
            self.cursor.advance();
        }
        debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        Program { statements }
    }

    /// Parse one statement starting at the current token.
    ///
    /// Leaves the cursor on the statement's last token (the `;` if present).
    fn statement(&mut self) -> Option<Stmt> {
        match self.cursor.current_kind() {
            TokenKind::Let => self.let_statement(),
            TokenKind::Return => self.return_statement(),
            _ => self.expression_statement(),
        }
    }

    /// `let IDENT = EXPR [;]`
    fn let_statement(&mut self) -> Option<Stmt> {
        let start = self.cursor.current_span();
        let name_span = self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.cursor.current().literal.clone(), name_span);
        self.expect_peek(TokenKind::Assign)?;
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        let span = start.merge(self.cursor.current_span());
        Some(Stmt::new(StmtKind::Let { name, value }, span))
    }

    /// `return EXPR [;]`
    fn return_statement(&mut self) -> Option<Stmt> {
        let start = self.cursor.current_span();
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        let span = start.merge(self.cursor.current_span());
        Some(Stmt::new(StmtKind::Return(value), span))
    }

    /// `EXPR [;]`
    fn expression_statement(&mut self) -> Option<Stmt> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        let span = expr.span.merge(self.cursor.current_span());
        Some(Stmt::new(StmtKind::Expression(expr), span))
    }

    fn skip_optional_semicolon(&mut self) {
        if self.cursor.peek_is(TokenKind::Semicolon) {
            self.cursor.advance();
        }
    }

    /// `{ STMT* }`, entered with the cursor on `{`.
    ///
    /// Ends on the closing `}`. Running out of input first is reported but
    /// the statements read so far are kept.
    pub(crate) fn block(&mut self) -> Block {
        let start = self.cursor.current_span();
        let mut statements = Vec::new();
        self.cursor.advance();

        while !self.cursor.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
            if let Some(stmt) = self.statement() {
                statements.push(stmt);
            }
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            self.error(
                ParseErrorKind::UnexpectedToken {
                    expected: TokenKind::RBrace,
                    found: TokenKind::Eof,
                },
                self.cursor.current_span(),
            );
        }

        Block {
            statements,
            span: start.merge(self.cursor.current_span()),
        }
    }
}
