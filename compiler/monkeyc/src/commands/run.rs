//! Run a whole file.

use monkey_eval::{Interpreter, Value};
use tracing::debug;

use super::{location, parse_diagnostics, read_file};
use crate::DriverError;

/// Parse and evaluate `source`.
///
/// Parse errors stop before evaluation. On success the program's value is
/// returned; only `puts` output reaches the interpreter's print handler.
pub fn run_source(
    path: &str,
    source: &str,
    interpreter: &mut Interpreter,
) -> Result<Value, DriverError> {
    let output = monkey_parse::parse(monkey_lexer::Lexer::new(source));
    if output.has_errors() {
        debug!(path, errors = output.errors.len(), "parse failed");
        return Err(parse_diagnostics(path, source, &output));
    }

    interpreter
        .eval_program(&output.program)
        .map_err(|error| DriverError::Runtime {
            location: match error.span {
                Some(span) => location(path, source, span),
                None => path.to_string(),
            },
            error,
        })
}

/// `monkey run <file>`
pub fn run_file(path: &str) -> Result<(), DriverError> {
    let source = read_file(path)?;
    let mut interpreter = Interpreter::new();
    run_source(path, &source, &mut interpreter)?;
    Ok(())
}
