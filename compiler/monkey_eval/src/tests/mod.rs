//! Evaluator tests.
//!
//! Most tests run source text through the real lexer and parser, so each
//! case reads like the Monkey program it checks.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use monkey_ir::Program;

use crate::{buffer_handler, Environment, Interpreter, Value};


fn parse_program(source: &str) -> Program {
    let output = monkey_parse::parse(monkey_lexer::lex(source));
    assert!(
        !output.has_errors(),
        "parse errors in {source:?}: {:?}",
        output.messages()
    );
    output.program
}

/// Evaluate `source` in a fresh environment.
fn eval(source: &str) -> Value {
    crate::evaluate(&parse_program(source), &Environment::new())
}

/// Evaluate `source` and return the error message it fails with.
fn eval_error(source: &str) -> String {
    match eval(source) {
        Value::Error(err) => err.to_string(),
        other => panic!("expected an error from {source:?}, got {other:?}"),
    }
}

/// Evaluate `source` with `puts` captured; returns the result and output.
fn eval_capturing(source: &str) -> (Value, String) {
    let out = buffer_handler();
    let mut interpreter = Interpreter::builder().print_handler(out.clone()).build();
    let value = interpreter
        .eval_program(&parse_program(source))
        .unwrap_or_else(Value::Error);
    (value, out.get_output())
}
