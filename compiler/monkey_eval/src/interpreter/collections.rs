//! Index expressions and hash literals.

use monkey_ir::Expr;

use super::Interpreter;
use crate::errors::{cannot_index, unhashable_key, ControlAction, EvalError};
use crate::value::{HashPair, HashTable};
use crate::{EvalResult, Value};

/// `collection[index]`.
///
/// Out-of-range array indices and missing hash keys are `null`, not errors.
pub(super) fn eval_index(collection: &Value, index: &Value) -> Result<Value, EvalError> {
    match (collection, index) {
        (Value::Array(items), Value::Int(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| items.get(i))
            .cloned()
            .unwrap_or(Value::Null)),
        (Value::Hash(table), key) => {
            let hash_key = key.hash_key().ok_or_else(|| unhashable_key(key))?;
            Ok(table
                .get(&hash_key)
                .map_or(Value::Null, |pair| pair.value.clone()))
        }
        _ => Err(cannot_index(collection)),
    }
}

impl Interpreter {
    /// Keys and values are evaluated in source order; a repeated key keeps
    /// the last value.
    pub(super) fn eval_hash_literal(&mut self, pairs: &[(Expr, Expr)]) -> EvalResult {
        let mut table = HashTable::default();
        table.reserve(pairs.len());
        for (key_expr, value_expr) in pairs {
            let key = self.eval_expr(key_expr)?;
            let Some(hash_key) = key.hash_key() else {
                return Err(ControlAction::from(unhashable_key(&key).with_span(key_expr.span)));
            };
            let value = self.eval_expr(value_expr)?;
            table.insert(hash_key, HashPair { key, value });
        }
        Ok(Value::hash(table))
    }
}
