//! Line-at-a-time read-eval-print loop.

use std::io::{BufRead, Write};

use monkey_eval::Interpreter;
use monkey_ir::StmtKind;
use tracing::debug;

pub const PROMPT: &str = ">> ";

/// Run the REPL until `input` is exhausted.
///
/// Every line is parsed and evaluated in the same interpreter, so bindings
/// carry over between lines. A line ending in a `let` prints nothing.
pub fn run_repl<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    interpreter: &mut Interpreter,
) -> std::io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            return Ok(());
        };
        if line.trim().is_empty() {
            continue;
        }

        let parsed = monkey_parse::parse(monkey_lexer::Lexer::new(&line));
        if parsed.has_errors() {
            debug!(errors = parsed.errors.len(), "discarding line");
            writeln!(output, "parser errors:")?;
            for message in parsed.messages() {
                writeln!(output, "\t{message}")?;
            }
            continue;
        }

        let ends_in_let = matches!(
            parsed.program.statements.last().map(|stmt| &stmt.kind),
            Some(StmtKind::Let { .. })
        );
        match interpreter.eval_program(&parsed.program) {
            Ok(_) if ends_in_let => {}
            Ok(value) => writeln!(output, "{value}")?,
            Err(err) => writeln!(output, "ERROR: {err}")?,
        }
    }
}
