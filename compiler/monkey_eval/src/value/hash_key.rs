//! Hash keys for Monkey hash maps.

use rustc_hash::FxHashMap;

use super::{Heap, Value};

/// Content-derived key for the three hashable value kinds.
///
/// Two values of the same kind and content always produce the same key, and
/// values of different kinds never collide (`1` and `true` are distinct
/// keys). Strings keep their bytes, so distinct strings never collide either.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashKey {
    Int(i64),
    Bool(bool),
    Str(Heap<String>),
}

/// A stored entry: the original key value and its value.
#[derive(Clone, Debug, PartialEq)]
pub struct HashPair {
    pub key: Value,
    pub value: Value,
}

/// Backing map of a `Value::Hash`.
pub type HashTable = FxHashMap<HashKey, HashPair>;

impl Value {
    /// Derive the hash key for this value.
    ///
    /// Returns `None` for every kind other than integer, boolean and string.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Int(n) => Some(HashKey::Int(*n)),
            Value::Bool(b) => Some(HashKey::Bool(*b)),
            Value::Str(s) => Some(HashKey::Str(s.clone())),
            Value::Null
            | Value::Array(_)
            | Value::Hash(_)
            | Value::Function(_)
            | Value::Builtin(_)
            | Value::Error(_) => None,
        }
    }
}
