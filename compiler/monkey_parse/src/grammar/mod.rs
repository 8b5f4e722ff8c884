//! Grammar productions.
//!
//! `stmt` handles programs, statements and blocks; `expr` holds the Pratt
//! loop and every prefix and infix production.

mod expr;
mod stmt;

pub use expr::Precedence;
