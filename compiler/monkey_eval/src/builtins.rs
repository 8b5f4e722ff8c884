//! Built-in functions.
//!
//! Builtins are resolved after the environment chain, so a user binding
//! named `len` shadows the builtin.

use std::fmt;

use crate::errors::{integer_overflow, unsupported_argument, wrong_arg_count, wrong_arg_type, EvalError};
use crate::print_handler::PrintHandlerImpl;
use crate::value::Value;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Len,
    First,
    Last,
    Rest,
    Push,
    Puts,
}

impl Builtin {
    pub const ALL: [Builtin; 6] = [
        Builtin::Len,
        Builtin::First,
        Builtin::Last,
        Builtin::Rest,
        Builtin::Push,
        Builtin::Puts,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Len => "len",
            Builtin::First => "first",
            Builtin::Last => "last",
            Builtin::Rest => "rest",
            Builtin::Push => "push",
            Builtin::Puts => "puts",
        }
    }

    pub fn lookup(name: &str) -> Option<Builtin> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    /// Required argument count; `None` for variadic builtins.
    pub fn arity(self) -> Option<usize> {
        match self {
            Builtin::Len | Builtin::First | Builtin::Last | Builtin::Rest => Some(1),
            Builtin::Push => Some(2),
            Builtin::Puts => None,
        }
    }

    /// Apply the builtin. `puts` writes through `out`.
    pub fn call(self, args: &[Value], out: &PrintHandlerImpl) -> Result<Value, EvalError> {
        match self {
            Builtin::Len => {
                let [arg] = exact_args::<1>(args)?;
                len(arg)
            }
            Builtin::First => {
                let [arg] = exact_args::<1>(args)?;
                let items = self.array_arg(arg)?;
                Ok(items.first().cloned().unwrap_or(Value::Null))
            }
            Builtin::Last => {
                let [arg] = exact_args::<1>(args)?;
                let items = self.array_arg(arg)?;
                Ok(items.last().cloned().unwrap_or(Value::Null))
            }
            Builtin::Rest => {
                let [arg] = exact_args::<1>(args)?;
                let items = self.array_arg(arg)?;
                Ok(match items.split_first() {
                    Some((_, rest)) => Value::array(rest.to_vec()),
                    None => Value::Null,
                })
            }
            Builtin::Push => {
                let [arr, item] = exact_args::<2>(args)?;
                let items = self.array_arg(arr)?;
                let mut pushed = Vec::with_capacity(items.len() + 1);
                pushed.extend_from_slice(items);
                pushed.push(item.clone());
                Ok(Value::array(pushed))
            }
            Builtin::Puts => {
                for arg in args {
                    out.println(&arg.to_string());
                }
                Ok(Value::Null)
            }
        }
    }

    fn array_arg(self, arg: &Value) -> Result<&[Value], EvalError> {
        match arg {
            Value::Array(items) => Ok(items.as_slice()),
            _ => Err(wrong_arg_type(self.name(), "ARRAY", arg)),
        }
    }
}

fn exact_args<const N: usize>(args: &[Value]) -> Result<&[Value; N], EvalError> {
    args.try_into().map_err(|_| wrong_arg_count(N, args.len()))
}

fn len(arg: &Value) -> Result<Value, EvalError> {
    let n = match arg {
        Value::Str(s) => s.len(),
        Value::Array(items) => items.len(),
        _ => return Err(unsupported_argument("len", arg)),
    };
    i64::try_from(n)
        .map(Value::Int)
        .map_err(|_| integer_overflow("len"))
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
