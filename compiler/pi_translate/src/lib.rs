//! Pi Translate - surface syntax tree to abstract machine IR.
//!
//! [`translate`] turns the parser's [`SurfaceProgram`] into a flat
//! [`Program`]. Along the way it:
//!
//! - maps operator lexemes onto opcodes (`"<="` becomes `LE`)
//! - rejects operands that can never have the operator's type, by syntactic
//!   shape alone (`1 + true`, `not 3`, `&x < 2`)
//! - lowers `var x = e` to `Bind(x, AllocateReference(e))`, `cons` to a plain
//!   `Bind`, `fn` to a bound `Abstraction` and `rec` groups to `RecBind`
//! - turns command lists into left-nested `Sequence`s, empty ones into `NoOp`

mod errors;
mod kind;
mod stack;
mod translator;

use pi_ir::ast::SurfaceProgram;
use pi_ir::{Program, StringInterner};

pub use errors::{TranslateError, TranslateResult};
pub use kind::{BinaryOperator, OperandKind};

use translator::Translator;

/// Translate a parsed program, interning identifiers into `interner`.
///
/// Pass the same interner to the machine so names resolve in diagnostics.
#[tracing::instrument(level = "debug", skip_all, fields(commands = program.commands.len()))]
pub fn translate(interner: &StringInterner, program: &SurfaceProgram) -> TranslateResult<Program> {
    Translator::new(interner).program(program)
}

#[cfg(test)]
mod tests;
