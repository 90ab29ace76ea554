//! Identifiers and references.

use pi_ir::Name;

use crate::errors::{expected_location, EvalResult};
use crate::machine::Machine;
use crate::value::{Bindable, Location, StackValue, Storable};

impl Machine<'_> {
    /// A `var` binding is read through its location once; anything else is
    /// pushed as bound.
    pub(super) fn eval_identifier(&mut self, name: Name) -> EvalResult {
        match self.lookup(name)? {
            Bindable::Location(location) => {
                let value = self.storage.read(location)?;
                self.values.push(value);
            }
            other => self.values.push(other),
        }
        Ok(())
    }

    /// `&x`: the location `x` is bound to.
    pub(super) fn eval_address_of(&mut self, name: Name) -> EvalResult {
        let location = self.location_of(name)?;
        self.values.push(StackValue::Location(location));
        Ok(())
    }

    /// `*x`: `x`'s cell holds a location; push what that location holds.
    pub(super) fn eval_value_of(&mut self, name: Name) -> EvalResult {
        let cell = self.location_of(name)?;
        let Storable::Location(target) = self.storage.read(cell)? else {
            return Err(expected_location(self.name_str(name)));
        };
        let value = self.storage.read(target)?;
        self.values.push(value);
        Ok(())
    }

    /// `REF`: allocate a cell for the value on top.
    pub(super) fn apply_ref(&mut self) -> EvalResult {
        let value = self.values.pop_storable()?;
        let location = self.allocate(value);
        self.values.push(StackValue::Location(location));
        Ok(())
    }

    fn location_of(&self, name: Name) -> EvalResult<Location> {
        match self.lookup(name)? {
            Bindable::Location(location) => Ok(location),
            _ => Err(expected_location(self.name_str(name))),
        }
    }
}
