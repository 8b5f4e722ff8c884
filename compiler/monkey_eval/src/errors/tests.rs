use pretty_assertions::assert_eq;

use super::*;

#[test]
fn operator_messages() {
    let five = Value::int(5);
    let yes = Value::Bool(true);
    let hello = Value::string("Hello");

    assert_eq!(
        type_mismatch(&five, BinaryOp::Add, &yes).to_string(),
        "type mismatch: INTEGER + BOOLEAN"
    );
    assert_eq!(
        invalid_binary_op(&hello, BinaryOp::Sub, &hello).to_string(),
        "unknown operator: STRING - STRING"
    );
    assert_eq!(
        invalid_prefix_op(PrefixOp::Neg, &yes).to_string(),
        "unknown operator: -BOOLEAN"
    );
}

#[test]
fn arithmetic_messages() {
    assert_eq!(division_by_zero().to_string(), "division by zero");
    assert_eq!(
        integer_overflow("addition").to_string(),
        "integer overflow in addition"
    );
}

#[test]
fn call_messages() {
    assert_eq!(undefined_variable("foo").to_string(), "identifier not found: foo");
    assert_eq!(
        not_callable(&Value::int(1)).to_string(),
        "not a function: INTEGER"
    );
    assert_eq!(
        wrong_arg_count(1, 2).to_string(),
        "wrong number of arguments. got=2, want=1"
    );
    assert_eq!(
        recursion_limit_exceeded(100).to_string(),
        "maximum recursion depth exceeded (100)"
    );
}

#[test]
fn collection_and_builtin_messages() {
    let func = Value::Builtin(crate::Builtin::Len);
    assert_eq!(
        unhashable_key(&Value::array(vec![])).to_string(),
        "unusable as hash key: ARRAY"
    );
    assert_eq!(cannot_index(&func).to_string(), "index operator not supported: BUILTIN");
    assert_eq!(
        unsupported_argument("len", &Value::int(1)).to_string(),
        "argument to `len` not supported, got INTEGER"
    );
    assert_eq!(
        wrong_arg_type("first", "ARRAY", &Value::int(1)).to_string(),
        "argument to `first` must be ARRAY, got INTEGER"
    );
}

#[test]
fn with_span_keeps_innermost() {
    let inner = Span::new(4, 5);
    let outer = Span::new(0, 10);
    let err = division_by_zero().with_span(inner).with_span(outer);
    assert_eq!(err.span, Some(inner));
}

#[test]
fn control_action_from_eval_error() {
    let action: ControlAction = division_by_zero().into();
    assert!(action.is_error());
    let Err(err) = action.into_result() else {
        panic!("expected error");
    };
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
}

#[test]
fn return_resolves_to_value() {
    let action = ControlAction::Return(Value::int(10));
    assert!(!action.is_error());
    assert_eq!(action.into_result(), Ok(Value::int(10)));
}

#[test]
fn with_span_if_error_ignores_return() {
    let action = ControlAction::Return(Value::Null).with_span_if_error(Span::new(1, 2));
    assert_eq!(action, ControlAction::Return(Value::Null));

    let action = ControlAction::from(division_by_zero()).with_span_if_error(Span::new(1, 2));
    let Err(err) = action.into_result() else {
        panic!("expected error");
    };
    assert_eq!(err.span, Some(Span::new(1, 2)));
}
