//! The value stack and its typed pop helpers.
//!
//! Every handler knows the shape of the stack it expects; the helpers turn a
//! shape mismatch into `ExpectedValue` and an empty stack into
//! `EmptyValueStack`.

use pi_ir::{Name, NodeId};

use crate::errors::{empty_value_stack, expected_value, EvalResult};
use crate::memory::{ClosureMark, EnvironmentSnapshot, LocationSetSnapshot};
use crate::value::{Bindable, ClosureRef, StackValue, Storable};
use crate::Environment;

#[derive(Clone, Debug, Default)]
pub struct ValueStack {
    values: Vec<StackValue>,
}

impl ValueStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, value: impl Into<StackValue>) {
        self.values.push(value.into());
    }

    pub fn pop(&mut self, expected: &str) -> EvalResult<StackValue> {
        self.values.pop().ok_or_else(|| empty_value_stack(expected))
    }

    pub fn peek(&self) -> Option<&StackValue> {
        self.values.last()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bottom to top.
    pub fn as_slice(&self) -> &[StackValue] {
        &self.values
    }

    pub fn pop_number(&mut self) -> EvalResult<f64> {
        match self.pop("number")? {
            StackValue::Number(n) => Ok(n),
            other => Err(expected_value("number", other.type_name())),
        }
    }

    pub fn pop_boolean(&mut self) -> EvalResult<bool> {
        match self.pop("boolean")? {
            StackValue::Boolean(b) => Ok(b),
            other => Err(expected_value("boolean", other.type_name())),
        }
    }

    pub fn pop_bindable(&mut self) -> EvalResult<Bindable> {
        let value = self.pop("bindable value")?;
        value
            .as_bindable()
            .ok_or_else(|| expected_value("bindable value", value.type_name()))
    }

    pub fn pop_storable(&mut self) -> EvalResult<Storable> {
        let value = self.pop("storable value")?;
        value
            .as_bindable()
            .and_then(|bindable| bindable.as_storable())
            .ok_or_else(|| expected_value("storable value", value.type_name()))
    }

    pub fn pop_closure(&mut self) -> EvalResult<ClosureRef> {
        match self.pop("closure")? {
            StackValue::Closure(closure) => Ok(closure),
            other => Err(expected_value("closure", other.type_name())),
        }
    }

    pub fn pop_identifier(&mut self) -> EvalResult<Name> {
        match self.pop("identifier")? {
            StackValue::Identifier(name) => Ok(name),
            other => Err(expected_value("identifier", other.type_name())),
        }
    }

    pub fn pop_pending(&mut self) -> EvalResult<NodeId> {
        match self.pop("pending node")? {
            StackValue::Pending(node) => Ok(node),
            other => Err(expected_value("pending node", other.type_name())),
        }
    }

    pub fn pop_environment(&mut self) -> EvalResult<EnvironmentSnapshot> {
        match self.pop("environment snapshot")? {
            StackValue::Environment(env) => Ok(env),
            other => Err(expected_value("environment snapshot", other.type_name())),
        }
    }

    pub fn pop_locations(&mut self) -> EvalResult<LocationSetSnapshot> {
        match self.pop("location set snapshot")? {
            StackValue::Locations(locations) => Ok(locations),
            other => Err(expected_value("location set snapshot", other.type_name())),
        }
    }

    pub fn pop_closure_mark(&mut self) -> EvalResult<ClosureMark> {
        match self.pop("closure table mark")? {
            StackValue::Closures(mark) => Ok(mark),
            other => Err(expected_value("closure table mark", other.type_name())),
        }
    }

    pub fn pop_declarations(&mut self) -> EvalResult<Environment> {
        match self.pop("declarations")? {
            StackValue::Declarations(decls) => Ok(decls),
            other => Err(expected_value("declarations", other.type_name())),
        }
    }

    /// The declarations accumulator of the innermost open block.
    pub fn declarations_mut(&mut self) -> EvalResult<&mut Environment> {
        match self.values.last_mut() {
            Some(StackValue::Declarations(decls)) => Ok(decls),
            Some(other) => Err(expected_value("declarations", other.type_name())),
            None => Err(empty_value_stack("declarations")),
        }
    }
}

#[cfg(test)]
mod tests;
