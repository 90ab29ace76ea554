//! Operand kinds and operator lexemes.
//!
//! The translator does no type inference. It classifies every expression by
//! its syntactic shape and rejects operator applications whose operands can
//! never have the right runtime type.

use std::fmt;

use pi_ir::{ArithOp, LogicOp};

use crate::errors::{TranslateError, TranslateResult};

/// Syntactic shape of an expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OperandKind {
    /// Number literal or arithmetic operation.
    Arithmetic,
    /// Boolean literal, comparison or connective.
    Logical,
    /// Identifier or `*x`: the type is only known at run time.
    Generic,
    /// `&x`.
    Reference,
}

impl OperandKind {
    /// May evaluate to a number.
    pub const fn is_numeric(self) -> bool {
        matches!(self, OperandKind::Arithmetic | OperandKind::Generic)
    }

    /// May evaluate to a boolean.
    pub const fn is_boolean(self) -> bool {
        matches!(self, OperandKind::Logical | OperandKind::Generic)
    }
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OperandKind::Arithmetic => "an arithmetic expression",
            OperandKind::Logical => "a logical expression",
            OperandKind::Generic => "an identifier",
            OperandKind::Reference => "a reference",
        })
    }
}

/// A binary operator the machine has an opcode for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    Arith(ArithOp),
    Logic(LogicOp),
}

impl BinaryOperator {
    /// Map a parser lexeme.
    pub fn from_lexeme(lexeme: &str) -> TranslateResult<Self> {
        let op = match lexeme {
            "+" => BinaryOperator::Arith(ArithOp::Sum),
            "-" => BinaryOperator::Arith(ArithOp::Sub),
            "*" => BinaryOperator::Arith(ArithOp::Mul),
            "/" => BinaryOperator::Arith(ArithOp::Div),
            "<" => BinaryOperator::Logic(LogicOp::Lt),
            "<=" => BinaryOperator::Logic(LogicOp::Le),
            ">" => BinaryOperator::Logic(LogicOp::Gt),
            ">=" => BinaryOperator::Logic(LogicOp::Ge),
            "==" => BinaryOperator::Logic(LogicOp::Eq),
            "and" => BinaryOperator::Logic(LogicOp::And),
            "or" => BinaryOperator::Logic(LogicOp::Or),
            other => {
                return Err(TranslateError::UnsupportedOperator {
                    op: other.to_string(),
                })
            }
        };
        Ok(op)
    }

    pub const fn mnemonic(self) -> &'static str {
        match self {
            BinaryOperator::Arith(op) => op.mnemonic(),
            BinaryOperator::Logic(op) => op.mnemonic(),
        }
    }

    /// Check both operands and return the kind of the application.
    pub fn check(self, lhs: OperandKind, rhs: OperandKind) -> TranslateResult<OperandKind> {
        match self {
            BinaryOperator::Arith(_) => {
                self.require(lhs, OperandKind::is_numeric, "numeric")?;
                self.require(rhs, OperandKind::is_numeric, "numeric")?;
                Ok(OperandKind::Arithmetic)
            }
            BinaryOperator::Logic(op) if op.is_comparison() => {
                self.require(lhs, OperandKind::is_numeric, "numeric")?;
                self.require(rhs, OperandKind::is_numeric, "numeric")?;
                Ok(OperandKind::Logical)
            }
            BinaryOperator::Logic(LogicOp::Eq) => {
                let comparable = |kind: OperandKind| kind != OperandKind::Reference;
                self.require(lhs, comparable, "a number or a boolean")?;
                self.require(rhs, comparable, "a number or a boolean")?;
                match (lhs, rhs) {
                    (OperandKind::Arithmetic, OperandKind::Logical) => {
                        Err(self.mismatch(rhs, "numeric like the left operand"))
                    }
                    (OperandKind::Logical, OperandKind::Arithmetic) => {
                        Err(self.mismatch(rhs, "logical like the left operand"))
                    }
                    _ => Ok(OperandKind::Logical),
                }
            }
            BinaryOperator::Logic(_) => {
                self.require(lhs, OperandKind::is_boolean, "logical")?;
                self.require(rhs, OperandKind::is_boolean, "logical")?;
                Ok(OperandKind::Logical)
            }
        }
    }

    fn require(
        self,
        kind: OperandKind,
        accepts: impl Fn(OperandKind) -> bool,
        expected: &'static str,
    ) -> TranslateResult<()> {
        if accepts(kind) {
            Ok(())
        } else {
            Err(self.mismatch(kind, expected))
        }
    }

    fn mismatch(self, found: OperandKind, expected: &'static str) -> TranslateError {
        TranslateError::MismatchedOperand {
            op: self.mnemonic().to_string(),
            expected,
            found,
        }
    }
}

/// `not` takes one operand that may be a boolean.
pub fn check_not(operand: OperandKind) -> TranslateResult<OperandKind> {
    if operand.is_boolean() {
        Ok(OperandKind::Logical)
    } else {
        Err(TranslateError::MismatchedOperand {
            op: "NOT".to_string(),
            expected: "logical",
            found: operand,
        })
    }
}

/// A branch or loop condition must be able to produce a boolean.
pub fn check_condition(construct: &str, condition: OperandKind) -> TranslateResult<()> {
    if condition.is_boolean() {
        Ok(())
    } else {
        Err(TranslateError::MismatchedOperand {
            op: construct.to_string(),
            expected: "logical",
            found: condition,
        })
    }
}
