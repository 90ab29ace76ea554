//! Translation errors.
//!
//! Every error rejects the whole program; the translator never produces a
//! partial IR.

use thiserror::Error;

use crate::kind::OperandKind;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    /// A binary operator lexeme the machine has no opcode for.
    #[error("unsupported operator: {op}")]
    UnsupportedOperator { op: String },

    /// An operand whose shape the operator cannot take.
    #[error("operand of {op} must be {expected}, found {found}")]
    MismatchedOperand {
        op: String,
        expected: &'static str,
        found: OperandKind,
    },

    /// The same formal appears twice in one function.
    #[error("duplicate formal {formal} in function {function}")]
    DuplicateFormal { function: String, formal: String },

    /// `rec` with no functions.
    #[error("recursive declaration group is empty")]
    EmptyRecursiveGroup,
}

pub type TranslateResult<T> = Result<T, TranslateError>;
