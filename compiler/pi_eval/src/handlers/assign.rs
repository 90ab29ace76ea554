//! Assignment and declarations.

use pi_ir::{Name, NodeId, OpCode};

use crate::errors::{unexpected_immutable_variable, EvalResult};
use crate::machine::Machine;
use crate::value::{Bindable, StackValue};

impl Machine<'_> {
    /// Park the target, then evaluate the value.
    pub(super) fn eval_assign(&mut self, target: Name, value: NodeId) {
        self.values.push(StackValue::Identifier(target));
        self.push_op(OpCode::Assign);
        self.push_node(value);
    }

    /// `ASSIGN`: store through the location the target is bound to.
    pub(super) fn apply_assign(&mut self) -> EvalResult {
        let value = self.values.pop_storable()?;
        let target = self.values.pop_identifier()?;
        match self.lookup(target)? {
            Bindable::Location(location) => self.storage.write(location, value),
            _ => Err(unexpected_immutable_variable(self.name_str(target))),
        }
    }

    pub(super) fn eval_bind(&mut self, name: Name, value: NodeId) {
        self.values.push(StackValue::Identifier(name));
        self.push_op(OpCode::Bind);
        self.push_node(value);
    }

    /// `BIND`: add the binding to the open block's declarations.
    pub(super) fn apply_bind(&mut self) -> EvalResult {
        let value = self.values.pop_bindable()?;
        let name = self.values.pop_identifier()?;
        self.values.declarations_mut()?.bind(name, value);
        Ok(())
    }
}
