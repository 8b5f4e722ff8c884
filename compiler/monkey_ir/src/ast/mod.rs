//! AST node types.
//!
//! Two closed families: statements ([`StmtKind`]) and expressions
//! ([`ExprKind`]). Every node carries the span of the source it came from.
//! Nodes are never mutated after the parser builds them.

mod display;
mod operators;

use std::rc::Rc;

use monkey_stack::ensure_sufficient_stack;

pub use operators::{BinaryOp, PrefixOp};

use crate::Span;

/// A parsed program: the ordered top-level statements.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// A named binding site (`let` target or function parameter).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Identifier {
            name: name.into(),
            span,
        }
    }
}

/// A brace-delimited statement sequence.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

/// Statement node.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// `let name = value;`
    Let { name: Identifier, value: Expr },
    /// `return value;`
    Return(Expr),
    /// A bare expression; its value is the statement's value.
    Expression(Expr),
    /// Nested block. Shares the enclosing environment.
    ///
    /// The parser never produces this: a statement starting with `{` is a
    /// hash literal. Only hand-built trees contain it.
    Block(Block),
}

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

// Drop glue recurses once per nesting level, like the parser and evaluator.
impl Drop for Expr {
    fn drop(&mut self) {
        if matches!(
            self.kind,
            ExprKind::Ident(_) | ExprKind::Int(_) | ExprKind::Str(_) | ExprKind::Bool(_)
        ) {
            return;
        }
        let kind = std::mem::replace(&mut self.kind, ExprKind::Bool(false));
        ensure_sufficient_stack(move || drop(kind));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Ident(String),
    Int(i64),
    Str(String),
    Bool(bool),
    Prefix {
        op: PrefixOp,
        operand: Box<Expr>,
    },
    Infix {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    If {
        condition: Box<Expr>,
        consequence: Block,
        alternative: Option<Block>,
    },
    /// Function literal. Parameters and body are shared with every closure
    /// created from it.
    Function {
        params: Rc<[Identifier]>,
        body: Rc<Block>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Array(Vec<Expr>),
    Index {
        collection: Box<Expr>,
        index: Box<Expr>,
    },
    /// Key/value pairs in source order.
    Hash(Vec<(Expr, Expr)>),
}

#[cfg(test)]
mod tests;
