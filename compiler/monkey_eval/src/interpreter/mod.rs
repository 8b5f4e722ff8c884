//! Tree-walking interpreter for Monkey.
//!
//! # Architecture
//!
//! Every node evaluates to `Result<Value, ControlAction>`. `?` gives the
//! short-circuit for both early exits:
//!
//! - `ControlAction::Error` unwinds to [`Interpreter::eval_program`].
//! - `ControlAction::Return` unwinds to the nearest function call, or to the
//!   program when `return` appears at top level.
//!
//! Errors pick up the span of the innermost expression that produced them.
//! Call frames swap the interpreter's current environment for a scope
//! enclosed by the callee's captured environment and restore it afterwards.

mod builder;
mod collections;
mod function_call;

pub use builder::InterpreterBuilder;

use std::rc::Rc;

use monkey_ir::{Block, Expr, ExprKind, Program, Stmt, StmtKind};
use monkey_stack::ensure_sufficient_stack;
use smallvec::SmallVec;
use tracing::debug;

use crate::builtins::Builtin;
use crate::errors::{undefined_variable, ControlAction, EvalError, EvalResult};
use crate::operators::evaluate_binary;
use crate::print_handler::SharedPrintHandler;
use crate::unary_operators::evaluate_unary;
use crate::{Environment, Value};

/// Evaluated call arguments. Most calls take a handful.
type CallArgs = SmallVec<[Value; 4]>;

/// Evaluator state that outlives a single program.
///
/// The REPL keeps one interpreter for the whole session so bindings carry
/// over from line to line.
pub struct Interpreter {
    env: Environment,
    print_handler: SharedPrintHandler,
    max_call_depth: usize,
    call_depth: usize,
}

impl Interpreter {
    /// An interpreter with a fresh environment that prints to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The current (top-level, outside of calls) environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate every statement of `program` in order.
    ///
    /// Returns the value of the last statement, the value of a top-level
    /// `return`, or the first error raised.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn eval_program(&mut self, program: &Program) -> Result<Value, EvalError> {
        let result = self
            .eval_statements(&program.statements)
            .or_else(ControlAction::into_result);
        match &result {
            Ok(value) => debug!(result = %value, "program finished"),
            Err(err) => debug!(error = %err, span = ?err.span, "program failed"),
        }
        result
    }

    fn eval_statements(&mut self, statements: &[Stmt]) -> EvalResult {
        let mut result = Value::Null;
        for stmt in statements {
            result = self.eval_stmt(stmt)?;
        }
        Ok(result)
    }

    #[inline]
    fn eval_block(&mut self, block: &Block) -> EvalResult {
        self.eval_statements(&block.statements)
    }

    fn eval_stmt(&mut self, stmt: &Stmt) -> EvalResult {
        match &stmt.kind {
            StmtKind::Let { name, value } => {
                let value = self.eval_expr(value)?;
                self.env.set(name.name.as_str(), value);
                Ok(Value::Null)
            }
            StmtKind::Return(expr) => {
                let value = self.eval_expr(expr)?;
                Err(ControlAction::Return(value))
            }
            StmtKind::Expression(expr) => self.eval_expr(expr),
            // Bare blocks share the enclosing scope.
            StmtKind::Block(block) => self.eval_block(block),
        }
    }

    /// Evaluate one expression, attaching its span to any error that
    /// doesn't already carry a narrower one.
    pub(crate) fn eval_expr(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
            .map_err(|action| action.with_span_if_error(expr.span))
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Int(n) => Ok(Value::Int(*n)),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Str(s) => Ok(Value::string(s.as_str())),
            ExprKind::Ident(name) => self.eval_ident(name),
            ExprKind::Prefix { op, operand } => {
                let operand = self.eval_expr(operand)?;
                Ok(evaluate_unary(*op, &operand)?)
            }
            ExprKind::Infix { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Ok(evaluate_binary(&left, &right, *op)?)
            }
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                if self.eval_expr(condition)?.is_truthy() {
                    self.eval_block(consequence)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative)
                } else {
                    Ok(Value::Null)
                }
            }
            ExprKind::Function { params, body } => Ok(Value::function(
                Rc::clone(params),
                Rc::clone(body),
                self.env.clone(),
            )),
            ExprKind::Call { callee, args } => {
                let callee = self.eval_expr(callee)?;
                let args = self.eval_args(args)?;
                self.eval_call(&callee, &args)
            }
            ExprKind::Array(items) => {
                let items = items
                    .iter()
                    .map(|item| self.eval_expr(item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::array(items))
            }
            ExprKind::Index { collection, index } => {
                let collection = self.eval_expr(collection)?;
                let index = self.eval_expr(index)?;
                Ok(collections::eval_index(&collection, &index)?)
            }
            ExprKind::Hash(pairs) => self.eval_hash_literal(pairs),
        }
    }

    /// Environment chain first, then builtins.
    fn eval_ident(&self, name: &str) -> EvalResult {
        if let Some(value) = self.env.get(name) {
            return Ok(value);
        }
        match Builtin::lookup(name) {
            Some(builtin) => Ok(Value::Builtin(builtin)),
            None => Err(undefined_variable(name).into()),
        }
    }

    /// Left to right; the first error wins.
    fn eval_args(&mut self, args: &[Expr]) -> Result<CallArgs, ControlAction> {
        let mut values = CallArgs::with_capacity(args.len());
        for arg in args {
            values.push(self.eval_expr(arg)?);
        }
        Ok(values)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
