#![allow(clippy::unwrap_used, reason = "tests unwrap for brevity")]

use pi_ir::{ArithOp, LogicOp};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{run, ProgramBuilder};
use crate::{evaluate_arith, Bindable, EvalErrorKind};

fn eval_arith(op: ArithOp, lhs: f64, rhs: f64) -> Result<Bindable, EvalErrorKind> {
    let mut b = ProgramBuilder::new();
    let l = b.num(lhs);
    let r = b.num(rhs);
    let root = b.arith(op, l, r);
    let (result, _) = run(b, root);
    result
        .map(|outcome| outcome.result.unwrap())
        .map_err(|err| err.kind)
}

fn eval_compare(op: LogicOp, lhs: f64, rhs: f64) -> Bindable {
    let mut b = ProgramBuilder::new();
    let l = b.num(lhs);
    let r = b.num(rhs);
    let root = b.logic(op, l, r);
    run(b, root).0.unwrap().result.unwrap()
}

fn eval_logic(op: LogicOp, lhs: bool, rhs: bool) -> Result<Bindable, EvalErrorKind> {
    let mut b = ProgramBuilder::new();
    let l = b.truth(lhs);
    let r = b.truth(rhs);
    let root = b.logic(op, l, r);
    let (result, _) = run(b, root);
    result
        .map(|outcome| outcome.result.unwrap())
        .map_err(|err| err.kind)
}

#[test]
fn arithmetic_is_left_to_right_in_meaning() {
    assert_eq!(eval_arith(ArithOp::Sub, 10.0, 3.0), Ok(Bindable::Number(7.0)));
    assert_eq!(eval_arith(ArithOp::Div, 12.0, 4.0), Ok(Bindable::Number(3.0)));
    assert_eq!(eval_arith(ArithOp::Sum, 1.5, 2.0), Ok(Bindable::Number(3.5)));
    assert_eq!(eval_arith(ArithOp::Mul, 6.0, 7.0), Ok(Bindable::Number(42.0)));
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(
        eval_arith(ArithOp::Div, 1.0, 0.0),
        Err(EvalErrorKind::DivisionByZero)
    );
    assert_eq!(
        evaluate_arith(ArithOp::Div, 0.0, 0.0).map_err(|err| err.kind),
        Err(EvalErrorKind::DivisionByZero)
    );
}

#[test]
fn comparisons() {
    assert_eq!(eval_compare(LogicOp::Lt, 1.0, 2.0), Bindable::Boolean(true));
    assert_eq!(eval_compare(LogicOp::Le, 2.0, 2.0), Bindable::Boolean(true));
    assert_eq!(eval_compare(LogicOp::Gt, 1.0, 2.0), Bindable::Boolean(false));
    assert_eq!(eval_compare(LogicOp::Ge, 1.0, 2.0), Bindable::Boolean(false));
    assert_eq!(eval_compare(LogicOp::Eq, 2.0, 2.0), Bindable::Boolean(true));
}

#[test]
fn connectives_and_equality_on_booleans() {
    assert_eq!(eval_logic(LogicOp::And, true, false), Ok(Bindable::Boolean(false)));
    assert_eq!(eval_logic(LogicOp::Or, true, false), Ok(Bindable::Boolean(true)));
    assert_eq!(eval_logic(LogicOp::Eq, false, false), Ok(Bindable::Boolean(true)));
}

#[test]
fn comparison_of_booleans_is_a_shape_error() {
    assert_eq!(
        eval_logic(LogicOp::Lt, true, false),
        Err(EvalErrorKind::ExpectedValue {
            expected: "number".to_string(),
            found: "boolean".to_string(),
        })
    );
}

#[test]
fn equality_of_mixed_types_is_rejected() {
    let mut b = ProgramBuilder::new();
    let l = b.num(1.0);
    let r = b.truth(true);
    let root = b.logic(LogicOp::Eq, l, r);
    let err = run(b, root).0.unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnexpectedType {
            op: "EQ".to_string(),
            left: "number".to_string(),
            right: "boolean".to_string(),
        }
    );
}

#[test]
fn not_negates() {
    let mut b = ProgramBuilder::new();
    let f = b.truth(false);
    let root = b.not(f);
    assert_eq!(run(b, root).0.unwrap().result, Some(Bindable::Boolean(true)));
}

#[test]
fn not_of_number_is_a_shape_error() {
    let mut b = ProgramBuilder::new();
    let n = b.num(0.0);
    let root = b.not(n);
    assert!(matches!(
        run(b, root).0.unwrap_err().kind,
        EvalErrorKind::ExpectedValue { .. }
    ));
}

#[test]
fn nested_expression() {
    // (10 - 4) / (1 + 2)
    let mut b = ProgramBuilder::new();
    let ten = b.num(10.0);
    let four = b.num(4.0);
    let one = b.num(1.0);
    let two = b.num(2.0);
    let lhs = b.arith(ArithOp::Sub, ten, four);
    let rhs = b.arith(ArithOp::Sum, one, two);
    let root = b.arith(ArithOp::Div, lhs, rhs);
    assert_eq!(run(b, root).0.unwrap().result, Some(Bindable::Number(2.0)));
}

proptest! {
    #[test]
    fn non_commutative_operators_keep_operand_order(
        lhs in -1_000i32..1_000,
        rhs in -1_000i32..1_000,
    ) {
        let (lhs, rhs) = (f64::from(lhs), f64::from(rhs));

        prop_assert_eq!(eval_arith(ArithOp::Sub, lhs, rhs), Ok(Bindable::Number(lhs - rhs)));
        if rhs != 0.0 {
            prop_assert_eq!(eval_arith(ArithOp::Div, lhs, rhs), Ok(Bindable::Number(lhs / rhs)));
        }
        prop_assert_eq!(eval_compare(LogicOp::Lt, lhs, rhs), Bindable::Boolean(lhs < rhs));
        prop_assert_eq!(eval_compare(LogicOp::Le, lhs, rhs), Bindable::Boolean(lhs <= rhs));
        prop_assert_eq!(eval_compare(LogicOp::Gt, lhs, rhs), Bindable::Boolean(lhs > rhs));
        prop_assert_eq!(eval_compare(LogicOp::Ge, lhs, rhs), Bindable::Boolean(lhs >= rhs));
    }
}
