//! Debug commands: dump tokens or the parsed program.

use std::fmt::Write;

use super::{parse_diagnostics, read_file};
use crate::DriverError;

/// One line per token: span, kind, literal.
pub fn lex_source(source: &str) -> String {
    let mut out = String::new();
    for token in monkey_lexer::Lexer::new(source) {
        let _ = writeln!(
            out,
            "{:<8} {:<12} {:?}",
            token.span.to_string(),
            token.kind.to_string(),
            token.literal
        );
    }
    out
}

/// `monkey lex <file>`
pub fn lex_file(path: &str) -> Result<(), DriverError> {
    let source = read_file(path)?;
    print!("{}", lex_source(&source));
    Ok(())
}

/// Canonical rendering of each top-level statement, one per line.
pub fn parse_source(path: &str, source: &str) -> Result<String, DriverError> {
    let output = monkey_parse::parse(monkey_lexer::Lexer::new(source));
    if output.has_errors() {
        return Err(parse_diagnostics(path, source, &output));
    }
    let mut out = String::new();
    for stmt in &output.program.statements {
        let _ = writeln!(out, "{stmt}");
    }
    Ok(out)
}

/// `monkey parse <file>`
pub fn parse_file(path: &str) -> Result<(), DriverError> {
    let source = read_file(path)?;
    print!("{}", parse_source(path, &source)?);
    Ok(())
}
