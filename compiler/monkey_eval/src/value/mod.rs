//! Runtime values for the Monkey interpreter.
//!
//! # Heap Enforcement
//!
//! Heap-backed variants hold a [`Heap<T>`], whose constructor is private to
//! this module. Everything else builds them through the factory methods:
//!
//! ```text
//! let s = Value::string("hello");        // OK
//! let list = Value::array(vec![]);       // OK
//! let s = Value::Str(Heap::new(...));    // ERROR: Heap::new is pub(super)
//! ```
//!
//! Values are immutable; `push` and friends build new collections.

mod function;
mod hash_key;
mod heap;

use std::fmt;
use std::rc::Rc;

use monkey_ir::{Block, Identifier};

pub use function::FunctionValue;
pub use hash_key::{HashKey, HashPair, HashTable};
pub use heap::Heap;

use crate::builtins::Builtin;
use crate::errors::EvalError;
use crate::Environment;

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Int(i64),
    Bool(bool),
    /// The single null value. Produced by `if` without a taken branch,
    /// missing hash keys and out-of-range indices.
    Null,
    Str(Heap<String>),
    Array(Heap<Vec<Value>>),
    Hash(Heap<HashTable>),
    Function(Heap<FunctionValue>),
    Builtin(Builtin),
    /// An evaluation error surfaced as a value by [`crate::evaluate`].
    Error(EvalError),
}

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Heap::new(items))
    }

    #[inline]
    pub fn hash(table: HashTable) -> Self {
        Value::Hash(Heap::new(table))
    }

    /// Create a closure over `env`.
    pub fn function(params: Rc<[Identifier]>, body: Rc<Block>, env: Environment) -> Self {
        Value::Function(Heap::new(FunctionValue { params, body, env }))
    }

    /// Upper-case type name used in runtime error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "INTEGER",
            Value::Bool(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::Str(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Error(_) => "ERROR",
        }
    }

    /// Only `false` and `null` are falsy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false) | Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
            Value::Str(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Hash(table) => {
                f.write_str("{")?;
                for (i, pair) in table.values().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                f.write_str("}")
            }
            Value::Function(func) => {
                f.write_str("fn(")?;
                for (i, param) in func.params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(&param.name)?;
                }
                write!(f, ") {{\n{}\n}}", func.body)
            }
            Value::Builtin(_) => f.write_str("builtin function"),
            Value::Error(err) => write!(f, "ERROR: {err}"),
        }
    }
}

/// Structural equality for scalars and collections, identity for closures.
///
/// This is host-side equality (tests, hash pairs). The language's `==`
/// lives in [`crate::operators`].
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Hash(a), Value::Hash(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

#[cfg(test)]
mod tests;
