#![allow(clippy::unwrap_used, reason = "tests unwrap for brevity")]

use pi_ir::ast::{BlockStmt, Cmd, Decl, Expr, FnDecl, SurfaceProgram};
use pi_ir::{ArithOp, LogicOp, NodeId, NodeKind, Program, StringInterner};
use pretty_assertions::assert_eq;

use crate::{translate, OperandKind, TranslateError};

fn translate_cmds(cmds: Vec<Cmd>) -> (StringInterner, Result<Program, TranslateError>) {
    let interner = StringInterner::new();
    let result = translate(&interner, &SurfaceProgram::new(cmds));
    (interner, result)
}

fn num(n: f64) -> Expr {
    Expr::Num(n)
}

fn print(e: Expr) -> Cmd {
    Cmd::Print(e)
}

fn function(name: &str, formals: &[&str], cmds: Vec<Cmd>) -> FnDecl {
    FnDecl {
        name: name.to_string(),
        formals: formals.iter().map(ToString::to_string).collect(),
        body: BlockStmt::new(vec![], cmds),
    }
}

fn kind(program: &Program, id: NodeId) -> NodeKind {
    program.arena.get(id).copied().unwrap()
}

#[test]
fn empty_program_is_noop() {
    let (_, program) = translate_cmds(vec![]);
    let program = program.unwrap();
    assert_eq!(kind(&program, program.root), NodeKind::NoOp);
    assert_eq!(program.arena.len(), 1);
}

#[test]
fn commands_become_left_nested_sequences() {
    let (_, program) = translate_cmds(vec![print(num(1.0)), print(num(2.0)), print(num(3.0))]);
    let program = program.unwrap();

    let NodeKind::Sequence { first, second } = kind(&program, program.root) else {
        panic!("expected a sequence at the root");
    };
    let NodeKind::Print(last) = kind(&program, second) else {
        panic!("expected the last print on the right");
    };
    assert_eq!(kind(&program, last), NodeKind::Number(3.0));
    assert!(matches!(kind(&program, first), NodeKind::Sequence { .. }));
}

#[test]
fn operator_lexemes_map_to_nodes() {
    let expr = Expr::binary("and", Expr::binary("<=", num(1.0), num(2.0)), Expr::Bool(true));
    let (_, program) = translate_cmds(vec![print(expr)]);
    let program = program.unwrap();

    let NodeKind::Print(value) = kind(&program, program.root) else {
        panic!("expected print");
    };
    let NodeKind::Logic { op, lhs, rhs } = kind(&program, value) else {
        panic!("expected a logic node");
    };
    assert_eq!(op, LogicOp::And);
    assert_eq!(kind(&program, rhs), NodeKind::Truth(true));
    assert!(matches!(
        kind(&program, lhs),
        NodeKind::Logic { op: LogicOp::Le, .. }
    ));
}

#[test]
fn var_allocates_and_cons_binds_directly() {
    let block = Cmd::block(
        vec![
            Decl::Var("x".to_string(), num(1.0)),
            Decl::Cons("y".to_string(), num(2.0)),
        ],
        vec![],
    );
    let (interner, program) = translate_cmds(vec![block]);
    let program = program.unwrap();

    let NodeKind::Block { declarations, .. } = kind(&program, program.root) else {
        panic!("expected a block");
    };
    let NodeKind::Sequence { first, second } = kind(&program, declarations) else {
        panic!("expected two declarations");
    };

    let NodeKind::Bind { name, value } = kind(&program, first) else {
        panic!("expected bind");
    };
    assert_eq!(interner.lookup(name), "x");
    assert!(matches!(kind(&program, value), NodeKind::AllocateReference(_)));

    let NodeKind::Bind { name, value } = kind(&program, second) else {
        panic!("expected bind");
    };
    assert_eq!(interner.lookup(name), "y");
    assert_eq!(kind(&program, value), NodeKind::Number(2.0));
}

#[test]
fn function_declarations() {
    let block = Cmd::block(
        vec![
            Decl::Fn(function("f", &["a", "b"], vec![Cmd::Nop])),
            Decl::Rec(vec![
                function("even", &["n"], vec![]),
                function("odd", &["n"], vec![]),
            ]),
        ],
        vec![Cmd::call("f", vec![num(1.0), num(2.0)])],
    );
    let (interner, program) = translate_cmds(vec![block]);
    let program = program.unwrap();

    let NodeKind::Block {
        declarations,
        commands,
    } = kind(&program, program.root)
    else {
        panic!("expected a block");
    };
    let NodeKind::Sequence { first, second } = kind(&program, declarations) else {
        panic!("expected two declarations");
    };

    let NodeKind::Bind { value, .. } = kind(&program, first) else {
        panic!("expected bind");
    };
    let NodeKind::Abstraction { formals, body } = kind(&program, value) else {
        panic!("expected an abstraction");
    };
    let formals: Vec<_> = program
        .arena
        .names(formals)
        .iter()
        .map(|&n| interner.lookup(n))
        .collect();
    assert_eq!(formals, vec!["a", "b"]);
    assert!(matches!(kind(&program, body), NodeKind::Block { .. }));

    let NodeKind::RecBind(group) = kind(&program, second) else {
        panic!("expected a recursive group");
    };
    let names: Vec<_> = program
        .arena
        .bindings(group)
        .iter()
        .map(|&(n, _)| interner.lookup(n))
        .collect();
    assert_eq!(names, vec!["even", "odd"]);

    let NodeKind::Call { callee, actuals } = kind(&program, commands) else {
        panic!("expected a call");
    };
    assert_eq!(interner.lookup(callee), "f");
    assert_eq!(actuals.len(), 2);
}

#[test]
fn if_without_else() {
    let cmd = Cmd::If(Expr::Bool(true), vec![Cmd::Nop], None);
    let (_, program) = translate_cmds(vec![cmd]);
    let program = program.unwrap();
    assert!(matches!(
        kind(&program, program.root),
        NodeKind::Conditional {
            else_branch: None,
            ..
        }
    ));
}

#[test]
fn unsupported_operator() {
    let (_, result) = translate_cmds(vec![print(Expr::binary("%", num(1.0), num(2.0)))]);
    assert_eq!(
        result.unwrap_err(),
        TranslateError::UnsupportedOperator {
            op: "%".to_string()
        }
    );
}

#[test]
fn arithmetic_on_a_boolean_literal() {
    let (_, result) = translate_cmds(vec![print(Expr::binary("+", num(1.0), Expr::Bool(true)))]);
    assert_eq!(
        result.unwrap_err(),
        TranslateError::MismatchedOperand {
            op: "SUM".to_string(),
            expected: "numeric",
            found: OperandKind::Logical,
        }
    );
}

#[test]
fn reference_is_not_an_operand() {
    let expr = Expr::binary("<", Expr::AddressOf("x".to_string()), num(2.0));
    let (_, result) = translate_cmds(vec![print(expr)]);
    assert!(matches!(
        result.unwrap_err(),
        TranslateError::MismatchedOperand {
            found: OperandKind::Reference,
            ..
        }
    ));
}

#[test]
fn reference_is_fine_in_value_position() {
    let (_, result) = translate_cmds(vec![Cmd::assign("p", Expr::AddressOf("x".to_string()))]);
    assert!(result.is_ok());
}

#[test]
fn not_of_a_number() {
    let (_, result) = translate_cmds(vec![print(Expr::logical_not(num(3.0)))]);
    assert!(matches!(
        result.unwrap_err(),
        TranslateError::MismatchedOperand { op, .. } if op == "NOT"
    ));
}

#[test]
fn loop_condition_must_be_logical() {
    let (_, result) = translate_cmds(vec![Cmd::While(num(1.0), vec![])]);
    assert_eq!(
        result.unwrap_err(),
        TranslateError::MismatchedOperand {
            op: "LOOP".to_string(),
            expected: "logical",
            found: OperandKind::Arithmetic,
        }
    );
}

#[test]
fn identifiers_pass_any_shape_check() {
    let expr = Expr::binary(
        "or",
        Expr::binary("==", Expr::ident("a"), Expr::ValueOf("p".to_string())),
        Expr::ident("b"),
    );
    let (_, result) = translate_cmds(vec![Cmd::If(expr, vec![], None)]);
    assert!(result.is_ok());
}

#[test]
fn duplicate_formal() {
    let block = Cmd::block(vec![Decl::Fn(function("f", &["a", "a"], vec![]))], vec![]);
    let (_, result) = translate_cmds(vec![block]);
    assert_eq!(
        result.unwrap_err(),
        TranslateError::DuplicateFormal {
            function: "f".to_string(),
            formal: "a".to_string(),
        }
    );
}

#[test]
fn empty_recursive_group() {
    let block = Cmd::block(vec![Decl::Rec(vec![])], vec![]);
    let (_, result) = translate_cmds(vec![block]);
    assert_eq!(result.unwrap_err(), TranslateError::EmptyRecursiveGroup);
}

#[test]
fn error_messages() {
    assert_eq!(
        TranslateError::UnsupportedOperator {
            op: "%".to_string()
        }
        .to_string(),
        "unsupported operator: %"
    );
    assert_eq!(
        TranslateError::MismatchedOperand {
            op: "SUM".to_string(),
            expected: "numeric",
            found: OperandKind::Logical,
        }
        .to_string(),
        "operand of SUM must be numeric, found a logical expression"
    );
}

#[test]
fn deeply_nested_expression() {
    let mut expr = num(0.0);
    for _ in 0..5_000 {
        expr = Expr::binary("+", expr, num(1.0));
    }
    let (_, program) = translate_cmds(vec![print(expr)]);
    let program = program.unwrap();
    assert_eq!(program.arena.len(), 5_000 * 2 + 2);
    assert!(matches!(
        kind(&program, program.root),
        NodeKind::Print(_)
    ));
    let NodeKind::Print(sum) = kind(&program, program.root) else {
        unreachable!();
    };
    assert!(matches!(
        kind(&program, sum),
        NodeKind::Arith {
            op: ArithOp::Sum,
            ..
        }
    ));
}
