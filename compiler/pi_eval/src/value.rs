//! Runtime values of the abstract machine.
//!
//! Three views over the same small set of runtime data:
//! - [`Storable`]: what a storage cell may hold
//! - [`Bindable`]: what a name may be bound to (storables plus closures)
//! - [`StackValue`]: anything that can sit on the value stack, including the
//!   bookkeeping entries that bracket blocks and calls

use std::fmt;

use pi_ir::{Name, NodeId};

use crate::memory::{ClosureMark, EnvironmentSnapshot, LocationSetSnapshot};
use crate::Environment;

/// A storage address.
///
/// `var` identifiers are bound to a `Location`; reading such an identifier
/// reads through it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub address: usize,
}

impl Location {
    #[inline]
    pub const fn new(address: usize) -> Self {
        Location { address }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "loc({})", self.address)
    }
}

/// Index into the closure table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClosureId(u32);

impl ClosureId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        ClosureId(raw)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Index into the fragment table of recursive groups.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FragmentId(u32);

impl FragmentId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        FragmentId(raw)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A closure value.
///
/// `recursive` is set for members of a `RecBind` group; it names the fragment
/// that is unfolded into the callee environment on every call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClosureRef {
    pub id: ClosureId,
    pub recursive: Option<FragmentId>,
}

impl ClosureRef {
    /// A plain (non-recursive) closure.
    pub const fn plain(id: ClosureId) -> Self {
        ClosureRef {
            id,
            recursive: None,
        }
    }

    /// A closure that reopens `fragment` when called.
    pub const fn recursive(id: ClosureId, fragment: FragmentId) -> Self {
        ClosureRef {
            id,
            recursive: Some(fragment),
        }
    }

    #[inline]
    pub const fn is_recursive(&self) -> bool {
        self.recursive.is_some()
    }
}

/// Value a storage cell can hold.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Storable {
    Number(f64),
    Boolean(bool),
    Location(Location),
}

impl Storable {
    pub const fn type_name(&self) -> &'static str {
        match self {
            Storable::Number(_) => "number",
            Storable::Boolean(_) => "boolean",
            Storable::Location(_) => "location",
        }
    }
}

impl From<Storable> for Bindable {
    fn from(value: Storable) -> Self {
        match value {
            Storable::Number(n) => Bindable::Number(n),
            Storable::Boolean(b) => Bindable::Boolean(b),
            Storable::Location(loc) => Bindable::Location(loc),
        }
    }
}

impl fmt::Display for Storable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Bindable::from(*self).fmt(f)
    }
}

/// Value an identifier can be bound to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Bindable {
    Number(f64),
    Boolean(bool),
    Location(Location),
    Closure(ClosureRef),
}

impl Bindable {
    pub const fn type_name(&self) -> &'static str {
        match self {
            Bindable::Number(_) => "number",
            Bindable::Boolean(_) => "boolean",
            Bindable::Location(_) => "location",
            Bindable::Closure(_) => "closure",
        }
    }

    /// The storable part of this value; closures cannot be stored.
    pub const fn as_storable(&self) -> Option<Storable> {
        match *self {
            Bindable::Number(n) => Some(Storable::Number(n)),
            Bindable::Boolean(b) => Some(Storable::Boolean(b)),
            Bindable::Location(loc) => Some(Storable::Location(loc)),
            Bindable::Closure(_) => None,
        }
    }
}

impl fmt::Display for Bindable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bindable::Number(n) => write!(f, "{n}"),
            Bindable::Boolean(b) => write!(f, "{b}"),
            Bindable::Location(loc) => write!(f, "{loc}"),
            Bindable::Closure(_) => write!(f, "<closure>"),
        }
    }
}

/// An entry on the value stack.
#[derive(Clone, Debug, PartialEq)]
pub enum StackValue {
    Number(f64),
    Boolean(bool),
    Location(Location),
    Closure(ClosureRef),
    /// Target of a pending `ASSIGN` or `BIND`.
    Identifier(Name),
    /// A `Conditional` or `Loop` waiting for its condition.
    Pending(NodeId),
    /// Environment to restore at `BLKCMD`.
    Environment(EnvironmentSnapshot),
    /// Allocation list to restore at `BLKCMD`.
    Locations(LocationSetSnapshot),
    /// Closure table size to truncate back to at `BLKCMD`.
    Closures(ClosureMark),
    /// Bindings produced by the declarations of the innermost open block.
    Declarations(Environment),
}

impl StackValue {
    pub const fn type_name(&self) -> &'static str {
        match self {
            StackValue::Number(_) => "number",
            StackValue::Boolean(_) => "boolean",
            StackValue::Location(_) => "location",
            StackValue::Closure(_) => "closure",
            StackValue::Identifier(_) => "identifier",
            StackValue::Pending(_) => "pending node",
            StackValue::Environment(_) => "environment snapshot",
            StackValue::Locations(_) => "location set snapshot",
            StackValue::Closures(_) => "closure table mark",
            StackValue::Declarations(_) => "declarations",
        }
    }

    /// The bindable carried by this entry, if it is one.
    pub fn as_bindable(&self) -> Option<Bindable> {
        match *self {
            StackValue::Number(n) => Some(Bindable::Number(n)),
            StackValue::Boolean(b) => Some(Bindable::Boolean(b)),
            StackValue::Location(loc) => Some(Bindable::Location(loc)),
            StackValue::Closure(c) => Some(Bindable::Closure(c)),
            _ => None,
        }
    }
}

impl From<Bindable> for StackValue {
    fn from(value: Bindable) -> Self {
        match value {
            Bindable::Number(n) => StackValue::Number(n),
            Bindable::Boolean(b) => StackValue::Boolean(b),
            Bindable::Location(loc) => StackValue::Location(loc),
            Bindable::Closure(c) => StackValue::Closure(c),
        }
    }
}

impl From<Storable> for StackValue {
    fn from(value: Storable) -> Self {
        StackValue::from(Bindable::from(value))
    }
}
