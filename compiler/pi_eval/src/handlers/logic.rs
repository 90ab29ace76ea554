use pi_ir::LogicOp;

use crate::errors::{unexpected_type, EvalResult};
use crate::machine::Machine;
use crate::value::StackValue;

impl Machine<'_> {
    pub(super) fn apply_logic(&mut self, op: LogicOp) -> EvalResult {
        let result = match op {
            LogicOp::Lt => self.pop_numbers().map(|(lhs, rhs)| lhs < rhs)?,
            LogicOp::Le => self.pop_numbers().map(|(lhs, rhs)| lhs <= rhs)?,
            LogicOp::Gt => self.pop_numbers().map(|(lhs, rhs)| lhs > rhs)?,
            LogicOp::Ge => self.pop_numbers().map(|(lhs, rhs)| lhs >= rhs)?,
            LogicOp::Eq => self.pop_equality()?,
            // Both operands are already evaluated: no short circuit.
            LogicOp::And => self.pop_booleans().map(|(lhs, rhs)| lhs && rhs)?,
            LogicOp::Or => self.pop_booleans().map(|(lhs, rhs)| lhs || rhs)?,
        };
        self.values.push(StackValue::Boolean(result));
        Ok(())
    }

    pub(super) fn apply_not(&mut self) -> EvalResult {
        let value = self.values.pop_boolean()?;
        self.values.push(StackValue::Boolean(!value));
        Ok(())
    }

    fn pop_numbers(&mut self) -> EvalResult<(f64, f64)> {
        let lhs = self.values.pop_number()?;
        let rhs = self.values.pop_number()?;
        Ok((lhs, rhs))
    }

    fn pop_booleans(&mut self) -> EvalResult<(bool, bool)> {
        let lhs = self.values.pop_boolean()?;
        let rhs = self.values.pop_boolean()?;
        Ok((lhs, rhs))
    }

    /// `==` on two numbers or two booleans, decided by the runtime types.
    #[allow(clippy::float_cmp, reason = "language equality is exact")]
    fn pop_equality(&mut self) -> EvalResult<bool> {
        let lhs = self.values.pop("operand of EQ")?;
        let rhs = self.values.pop("operand of EQ")?;
        match (&lhs, &rhs) {
            (StackValue::Number(a), StackValue::Number(b)) => Ok(a == b),
            (StackValue::Boolean(a), StackValue::Boolean(b)) => Ok(a == b),
            _ => Err(unexpected_type("EQ", lhs.type_name(), rhs.type_name())),
        }
    }
}
