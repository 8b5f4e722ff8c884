//! Binary operators.
//!
//! Dispatch is a single `match` on the operand kinds; the value set is
//! closed, so the compiler checks every pairing is handled.

use monkey_ir::BinaryOp;

use crate::errors::{division_by_zero, integer_overflow, invalid_binary_op, type_mismatch, EvalError};
use crate::value::{Heap, Value};

type OpResult = Result<Value, EvalError>;

/// Checked arithmetic where overflow is the only failure.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> OpResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Checked division with a zero guard.
#[inline]
fn checked_div(is_zero: bool, op: impl FnOnce() -> Option<i64>, op_name: &'static str) -> OpResult {
    if is_zero {
        Err(division_by_zero())
    } else {
        op().map(Value::Int).ok_or_else(|| integer_overflow(op_name))
    }
}

/// Evaluate `left op right`.
///
/// Operands of different kinds are a type mismatch for every operator,
/// `==` included.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> OpResult {
    let equal = match (left, right) {
        (Value::Int(a), Value::Int(b)) => return eval_int_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) if op == BinaryOp::Add => {
            return Ok(Value::string(concat(a, b)));
        }
        (Value::Str(a), Value::Str(b)) => a.as_str() == b.as_str(),
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Null, Value::Null) => true,
        (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
        (Value::Hash(a), Value::Hash(b)) => a.ptr_eq(b),
        (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
        (Value::Builtin(a), Value::Builtin(b)) => a == b,
        (Value::Error(_), Value::Error(_)) => return Err(invalid_binary_op(left, op, right)),
        _ => return Err(type_mismatch(left, op, right)),
    };
    match op {
        BinaryOp::Eq => Ok(Value::Bool(equal)),
        BinaryOp::NotEq => Ok(Value::Bool(!equal)),
        _ => Err(invalid_binary_op(left, op, right)),
    }
}

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> OpResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => checked_div(b == 0, || a.checked_div(b), "division"),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
    }
}

fn concat(a: &Heap<String>, b: &Heap<String>) -> String {
    let mut out = String::with_capacity(a.len() + b.len());
    out.push_str(a);
    out.push_str(b);
    out
}
