//! Monkey IR - tokens and syntax tree types
//!
//! This crate contains the data structures shared by every stage of the
//! Monkey pipeline:
//! - Spans for source locations
//! - Tokens produced by the lexer
//! - AST nodes (`Program`, `Stmt`, `Expr`, `Block`)
//! - Binary and prefix operators
//!
//! # Design Philosophy
//!
//! - **Data only**: nodes carry no behavior beyond construction and rendering.
//! - **Immutable after parse**: the evaluator only reads the tree. Function
//!   bodies are reference counted so closures share them with the AST.
//! - **Canonical rendering**: every node implements `Display` with the fully
//!   parenthesized form used by parser tests and the `parse` command.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
mod token;

pub use ast::{BinaryOp, Block, Expr, ExprKind, Identifier, PrefixOp, Program, Stmt, StmtKind};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind};
