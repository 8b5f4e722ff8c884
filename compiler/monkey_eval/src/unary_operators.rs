//! Prefix operators.

use monkey_ir::PrefixOp;

use crate::errors::{integer_overflow, invalid_prefix_op, EvalError};
use crate::value::Value;

/// Evaluate `op operand`.
///
/// `!` works on every value through truthiness; `-` only on integers.
pub fn evaluate_unary(op: PrefixOp, operand: &Value) -> Result<Value, EvalError> {
    match (op, operand) {
        (PrefixOp::Not, _) => Ok(Value::Bool(!operand.is_truthy())),
        (PrefixOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (PrefixOp::Neg, _) => Err(invalid_prefix_op(op, operand)),
    }
}
