//! Runtime errors and non-local control flow for the evaluator.
//!
//! `EvalErrorKind` is the structured category; its `Display` is the exact
//! message users see. Factory functions are the intended way to build
//! errors so the hot evaluation paths stay free of formatting code.

use monkey_ir::{BinaryOp, PrefixOp, Span};

use crate::value::Value;

/// Typed category of a runtime error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Operators
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: &'static str,
        op: BinaryOp,
        right: &'static str,
    },
    #[error("unknown operator: {left} {op} {right}")]
    InvalidBinaryOp {
        left: &'static str,
        op: BinaryOp,
        right: &'static str,
    },
    #[error("unknown operator: {op}{operand}")]
    InvalidPrefixOp {
        op: PrefixOp,
        operand: &'static str,
    },

    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    // Names and calls
    #[error("identifier not found: {name}")]
    UndefinedVariable { name: String },
    #[error("not a function: {type_name}")]
    NotCallable { type_name: &'static str },
    #[error("wrong number of arguments. got={got}, want={expected}")]
    ArityMismatch { expected: usize, got: usize },
    #[error("maximum recursion depth exceeded ({depth})")]
    StackOverflow { depth: usize },

    // Collections
    #[error("index operator not supported: {type_name}")]
    IndexNotSupported { type_name: &'static str },
    #[error("unusable as hash key: {type_name}")]
    UnhashableKey { type_name: &'static str },

    // Builtins
    #[error("argument to `{builtin}` not supported, got {type_name}")]
    UnsupportedArgument {
        builtin: &'static str,
        type_name: &'static str,
    },
    #[error("argument to `{builtin}` must be {expected}, got {type_name}")]
    WrongArgumentType {
        builtin: &'static str,
        expected: &'static str,
        type_name: &'static str,
    },
}

/// A runtime error with the location of the expression that raised it.
///
/// The span is attached by the innermost expression evaluation that sees
/// the error, and never overwritten on the way out.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

impl EvalError {
    #[inline]
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach `span` unless a more precise one is already present.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }
}

/// Why evaluation stopped walking the current statement list.
///
/// `Return` unwinds to the nearest function boundary (or the program);
/// `Error` unwinds all the way out.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    Return(Value),
    Error(Box<EvalError>),
}

impl ControlAction {
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, ControlAction::Error(_))
    }

    /// Attach `span` to an error, leaving a pending return untouched.
    #[must_use]
    pub fn with_span_if_error(self, span: Span) -> Self {
        match self {
            ControlAction::Error(err) => ControlAction::Error(Box::new(err.with_span(span))),
            ControlAction::Return(_) => self,
        }
    }

    /// Resolve at a function or program boundary: a return becomes its
    /// value, an error stays an error.
    pub fn into_result(self) -> Result<Value, EvalError> {
        match self {
            ControlAction::Return(value) => Ok(value),
            ControlAction::Error(err) => Err(*err),
        }
    }
}

impl From<EvalError> for ControlAction {
    #[inline]
    fn from(err: EvalError) -> Self {
        ControlAction::Error(Box::new(err))
    }
}

/// Result of evaluating one node.
pub type EvalResult = Result<Value, ControlAction>;

// Operator errors

#[cold]
pub fn type_mismatch(left: &Value, op: BinaryOp, right: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::TypeMismatch {
        left: left.type_name(),
        op,
        right: right.type_name(),
    })
}

#[cold]
pub fn invalid_binary_op(left: &Value, op: BinaryOp, right: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidBinaryOp {
        left: left.type_name(),
        op,
        right: right.type_name(),
    })
}

#[cold]
pub fn invalid_prefix_op(op: PrefixOp, operand: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidPrefixOp {
        op,
        operand: operand.type_name(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::IntegerOverflow { operation })
}

// Name and call errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_callable(callee: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::NotCallable {
        type_name: callee.type_name(),
    })
}

#[cold]
pub fn wrong_arg_count(expected: usize, got: usize) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch { expected, got })
}

#[cold]
pub fn recursion_limit_exceeded(depth: usize) -> EvalError {
    EvalError::new(EvalErrorKind::StackOverflow { depth })
}

// Collection errors

#[cold]
pub fn cannot_index(collection: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::IndexNotSupported {
        type_name: collection.type_name(),
    })
}

#[cold]
pub fn unhashable_key(key: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::UnhashableKey {
        type_name: key.type_name(),
    })
}

// Builtin errors

#[cold]
pub fn unsupported_argument(builtin: &'static str, arg: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::UnsupportedArgument {
        builtin,
        type_name: arg.type_name(),
    })
}

#[cold]
pub fn wrong_arg_type(builtin: &'static str, expected: &'static str, arg: &Value) -> EvalError {
    EvalError::new(EvalErrorKind::WrongArgumentType {
        builtin,
        expected,
        type_name: arg.type_name(),
    })
}

#[cfg(test)]
mod tests;
