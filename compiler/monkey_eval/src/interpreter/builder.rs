//! `InterpreterBuilder` for configuring an [`Interpreter`].

use super::Interpreter;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::Environment;

/// Builder for [`Interpreter`].
///
/// Defaults: a fresh environment, stdout for `puts`, and a call depth
/// limit of [`InterpreterBuilder::DEFAULT_MAX_CALL_DEPTH`].
pub struct InterpreterBuilder {
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: usize,
}

impl InterpreterBuilder {
    pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

    pub fn new() -> Self {
        Self {
            env: None,
            print_handler: None,
            max_call_depth: Self::DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Evaluate in `env`. Top-level `let`s bind into it, so the caller
    /// sees them afterwards.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Where `puts` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Maximum number of nested user function calls.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            env: self.env.unwrap_or_default(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
