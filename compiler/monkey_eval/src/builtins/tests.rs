#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use super::*;
use crate::print_handler::buffer_handler;

fn call(builtin: Builtin, args: &[Value]) -> Result<Value, EvalError> {
    builtin.call(args, &PrintHandlerImpl::Silent)
}

fn ints(ns: &[i64]) -> Value {
    Value::array(ns.iter().copied().map(Value::Int).collect())
}

#[test]
fn lookup_by_name() {
    for builtin in Builtin::ALL {
        assert_eq!(Builtin::lookup(builtin.name()), Some(builtin));
    }
    assert_eq!(Builtin::lookup("length"), None);
    assert_eq!(Builtin::lookup("Len"), None);
}

#[test]
fn len_counts_bytes_and_elements() {
    assert_eq!(call(Builtin::Len, &[Value::string("")]), Ok(Value::int(0)));
    assert_eq!(call(Builtin::Len, &[Value::string("four")]), Ok(Value::int(4)));
    assert_eq!(call(Builtin::Len, &[Value::string("héllo")]), Ok(Value::int(6)));
    assert_eq!(call(Builtin::Len, &[ints(&[1, 2, 3])]), Ok(Value::int(3)));
}

#[test]
fn len_rejects_other_kinds() {
    let err = call(Builtin::Len, &[Value::int(1)]).unwrap_err();
    assert_eq!(err.to_string(), "argument to `len` not supported, got INTEGER");
}

#[test]
fn arity_is_checked_first() {
    let err = call(Builtin::Len, &[Value::string("one"), Value::string("two")]).unwrap_err();
    assert_eq!(err.to_string(), "wrong number of arguments. got=2, want=1");

    let err = call(Builtin::Push, &[ints(&[])]).unwrap_err();
    assert_eq!(err.to_string(), "wrong number of arguments. got=1, want=2");

    let err = call(Builtin::First, &[]).unwrap_err();
    assert_eq!(err.to_string(), "wrong number of arguments. got=0, want=1");
}

#[test]
fn first_last_rest() {
    let arr = ints(&[1, 2, 3]);
    assert_eq!(call(Builtin::First, &[arr.clone()]), Ok(Value::int(1)));
    assert_eq!(call(Builtin::Last, &[arr.clone()]), Ok(Value::int(3)));
    assert_eq!(call(Builtin::Rest, &[arr]), Ok(ints(&[2, 3])));
}

#[test]
fn empty_array_yields_null() {
    for builtin in [Builtin::First, Builtin::Last, Builtin::Rest] {
        assert_eq!(call(builtin, &[ints(&[])]), Ok(Value::Null));
    }
}

#[test]
fn array_builtins_reject_non_arrays() {
    let err = call(Builtin::First, &[Value::int(1)]).unwrap_err();
    assert_eq!(err.to_string(), "argument to `first` must be ARRAY, got INTEGER");
    let err = call(Builtin::Push, &[Value::string("s"), Value::int(1)]).unwrap_err();
    assert_eq!(err.to_string(), "argument to `push` must be ARRAY, got STRING");
}

#[test]
fn push_leaves_original_untouched() {
    let arr = ints(&[1]);
    let pushed = call(Builtin::Push, &[arr.clone(), Value::int(2)]);
    assert_eq!(pushed, Ok(ints(&[1, 2])));
    assert_eq!(arr, ints(&[1]));
}

#[test]
fn puts_prints_each_argument() {
    let out = buffer_handler();
    let result = Builtin::Puts.call(&[Value::string("hi"), ints(&[1, 2]), Value::Null], &out);
    assert_eq!(result, Ok(Value::Null));
    assert_eq!(out.get_output(), "hi\n[1, 2]\nnull\n");
}

#[test]
fn puts_with_no_arguments_prints_nothing() {
    let out = buffer_handler();
    assert_eq!(Builtin::Puts.call(&[], &out), Ok(Value::Null));
    assert_eq!(out.get_output(), "");
    assert_eq!(Builtin::Puts.arity(), None);
}
