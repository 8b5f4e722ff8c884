//! Monkey Eval - tree-walking evaluator for the Monkey language.
//!
//! # Architecture
//!
//! - `Value`: closed enum of runtime values; heap variants share via `Heap<T>`
//! - `Environment`: chain of `LocalScope<Scope>` for lexical scoping
//! - `evaluate_binary` / `evaluate_unary`: direct enum dispatch for operators
//! - `Builtin`: `len`, `first`, `last`, `rest`, `push` and `puts`
//! - `Interpreter`: walks the AST, threading `Result<Value, ControlAction>`
//!
//! # Entry points
//!
//! [`evaluate`] folds errors into [`Value::Error`]. [`Interpreter::eval_program`]
//! keeps them in a `Result` and is what the CLI uses.

mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

#[cfg(test)]
mod tests;

use monkey_ir::Program;

pub use builtins::Builtin;
pub use environment::{Environment, LocalScope, Scope};
pub use errors::{ControlAction, EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::{FunctionValue, HashKey, HashPair, HashTable, Heap, Value};

/// Evaluate `program` in `env`.
///
/// Top-level bindings land in `env`. An evaluation error is returned as
/// `Value::Error` rather than a `Result`.
pub fn evaluate(program: &Program, env: &Environment) -> Value {
    let mut interpreter = InterpreterBuilder::new().env(env.clone()).build();
    interpreter
        .eval_program(program)
        .unwrap_or_else(Value::Error)
}
