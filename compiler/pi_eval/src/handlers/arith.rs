use pi_ir::ArithOp;

use crate::errors::{division_by_zero, EvalResult};
use crate::machine::Machine;
use crate::value::StackValue;

/// `lhs op rhs` over numbers.
pub fn evaluate_arith(op: ArithOp, lhs: f64, rhs: f64) -> EvalResult<f64> {
    match op {
        ArithOp::Mul => Ok(lhs * rhs),
        ArithOp::Div if rhs == 0.0 => Err(division_by_zero()),
        ArithOp::Div => Ok(lhs / rhs),
        ArithOp::Sum => Ok(lhs + rhs),
        ArithOp::Sub => Ok(lhs - rhs),
    }
}

impl Machine<'_> {
    pub(super) fn apply_arith(&mut self, op: ArithOp) -> EvalResult {
        let lhs = self.values.pop_number()?;
        let rhs = self.values.pop_number()?;
        let result = evaluate_arith(op, lhs, rhs)?;
        self.values.push(StackValue::Number(result));
        Ok(())
    }
}
