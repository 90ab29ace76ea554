#![allow(clippy::unwrap_used, reason = "tests unwrap for brevity")]

use super::*;
use crate::errors::EvalErrorKind;
use crate::value::Location;
use pretty_assertions::assert_eq;

#[test]
fn test_typed_pops() {
    let mut stack = ValueStack::new();
    stack.push(StackValue::Boolean(true));
    stack.push(StackValue::Number(2.0));

    assert_eq!(stack.pop_number(), Ok(2.0));
    assert_eq!(stack.pop_boolean(), Ok(true));
    assert!(stack.is_empty());
}

#[test]
fn test_wrong_shape_reports_found_type() {
    let mut stack = ValueStack::new();
    stack.push(StackValue::Boolean(true));

    let err = stack.pop_number().unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::ExpectedValue {
            expected: "number".to_string(),
            found: "boolean".to_string(),
        }
    );
}

#[test]
fn test_empty_stack() {
    let mut stack = ValueStack::new();
    let err = stack.pop_identifier().unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::EmptyValueStack {
            expected: "identifier".to_string(),
        }
    );
}

#[test]
fn test_storable_accepts_locations() {
    let mut stack = ValueStack::new();
    stack.push(StackValue::Location(Location::new(1)));
    assert_eq!(stack.pop_storable(), Ok(Storable::Location(Location::new(1))));

    stack.push(StackValue::Identifier(Name::EMPTY));
    assert!(stack.pop_storable().is_err());
}

#[test]
fn test_declarations_accumulate_on_top() {
    let mut stack = ValueStack::new();
    stack.push(StackValue::Declarations(Environment::new()));

    stack
        .declarations_mut()
        .unwrap()
        .bind(Name::from_raw(3), Bindable::Number(1.0));
    let decls = stack.pop_declarations().unwrap();
    assert_eq!(decls.lookup(Name::from_raw(3)), Some(Bindable::Number(1.0)));

    stack.push(StackValue::Number(0.0));
    assert!(stack.declarations_mut().is_err());
}
