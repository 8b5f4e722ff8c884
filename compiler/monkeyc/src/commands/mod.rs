//! Command implementations for the `monkey` binary.

mod debug;
mod repl;
mod run;

use monkey_ir::Span;
use monkey_parse::ParseOutput;

use crate::DriverError;

pub use debug::{lex_file, lex_source, parse_file, parse_source};
pub use repl::{run_repl, PROMPT};
pub use run::{run_file, run_source};

/// Read a source file, turning I/O failures into readable diagnostics.
pub fn read_file(path: &str) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|e| DriverError::from_read(path, e))
}

/// 1-based line and column of a byte offset.
///
/// Offsets past the end of `source` resolve to the position just after the
/// last character.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let col = before[line_start..].chars().count() + 1;
    (line, col)
}

/// `path:line:col`
pub(crate) fn location(path: &str, source: &str, span: Span) -> String {
    let (line, col) = line_col(source, span.to_range().start);
    format!("{path}:{line}:{col}")
}

pub(crate) fn parse_diagnostics(path: &str, source: &str, output: &ParseOutput) -> DriverError {
    let diagnostics = output
        .errors
        .iter()
        .map(|err| format!("{}: {err}", location(path, source, err.span)))
        .collect();
    DriverError::Parse { diagnostics }
}
