use pretty_assertions::assert_eq;

use super::*;

#[test]
fn type_names() {
    assert_eq!(Value::int(1).type_name(), "INTEGER");
    assert_eq!(Value::Bool(true).type_name(), "BOOLEAN");
    assert_eq!(Value::Null.type_name(), "NULL");
    assert_eq!(Value::string("s").type_name(), "STRING");
    assert_eq!(Value::array(vec![]).type_name(), "ARRAY");
    assert_eq!(Value::hash(HashTable::default()).type_name(), "HASH");
    assert_eq!(Value::Builtin(Builtin::Len).type_name(), "BUILTIN");
}

#[test]
fn truthiness() {
    assert!(Value::int(0).is_truthy());
    assert!(Value::string("").is_truthy());
    assert!(Value::array(vec![]).is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(!Value::Null.is_truthy());
}

#[test]
fn hash_keys_compare_by_content() {
    assert_eq!(Value::string("name").hash_key(), Value::string("name").hash_key());
    assert_ne!(Value::string("name").hash_key(), Value::string("eman").hash_key());
    assert_eq!(Value::int(7).hash_key(), Some(HashKey::Int(7)));
    assert_eq!(Value::Bool(false).hash_key(), Some(HashKey::Bool(false)));
}

#[test]
fn hash_keys_are_kind_tagged() {
    assert_ne!(Value::int(1).hash_key(), Value::Bool(true).hash_key());
    assert_ne!(Value::int(1).hash_key(), Value::string("1").hash_key());
}

#[test]
fn only_scalars_are_hashable() {
    assert_eq!(Value::Null.hash_key(), None);
    assert_eq!(Value::array(vec![Value::int(1)]).hash_key(), None);
    assert_eq!(Value::hash(HashTable::default()).hash_key(), None);
    assert_eq!(Value::Builtin(Builtin::Puts).hash_key(), None);
}

#[test]
fn display_forms() {
    assert_eq!(Value::int(-3).to_string(), "-3");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::string("raw text").to_string(), "raw text");
    assert_eq!(
        Value::array(vec![Value::int(1), Value::string("two"), Value::Null]).to_string(),
        "[1, two, null]"
    );
    assert_eq!(Value::Builtin(Builtin::Len).to_string(), "builtin function");
}

#[test]
fn single_entry_hash_display() {
    let mut table = HashTable::default();
    let key = Value::string("a");
    table.insert(
        HashKey::Str(Heap::new("a".to_string())),
        HashPair {
            key,
            value: Value::int(1),
        },
    );
    assert_eq!(Value::hash(table).to_string(), "{a: 1}");
}

#[test]
fn heap_clones_share_allocation() {
    let a = Value::array(vec![Value::int(1)]);
    let b = a.clone();
    let (Value::Array(x), Value::Array(y)) = (&a, &b) else {
        panic!("expected arrays");
    };
    assert!(x.ptr_eq(y));

    let c = Value::array(vec![Value::int(1)]);
    let Value::Array(z) = &c else {
        panic!("expected array");
    };
    assert!(!x.ptr_eq(z));
    // Structural equality still holds.
    assert_eq!(a, c);
}
