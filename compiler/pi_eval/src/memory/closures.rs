//! Closure and fragment tables.
//!
//! Closures are created once and never change, so the machine refers to them
//! by [`ClosureId`]. A recursive group (`RecBind`) additionally records a
//! fragment: the names of the group and the closure each one denotes. Calling
//! a member of the group unfolds the fragment into the callee environment,
//! re-wrapping every member so that it points at the same fragment again.
//!
//! Closures are not storable, so nothing created inside a block outlives it.
//! Block and call entry take a [`ClosureMark`]; `BLKCMD` truncates back to it.

use pi_ir::{Name, NameRange, NodeId};

use crate::value::{Bindable, ClosureId, ClosureRef, FragmentId};
use crate::Environment;

/// A function value: formals, body block and the environment it was created in.
#[derive(Clone, Debug, PartialEq)]
pub struct Closure {
    pub formals: NameRange,
    /// A `Block` node.
    pub body: NodeId,
    pub captured: Environment,
}

/// Table sizes at block or call entry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClosureMark {
    closures: usize,
    fragments: usize,
}

#[derive(Clone, Debug, Default)]
pub struct ClosureTable {
    closures: Vec<Closure>,
    fragments: Vec<Vec<(Name, ClosureId)>>,
}

impl ClosureTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, closure: Closure) -> ClosureId {
        let id = ClosureId::from_raw(to_u32(self.closures.len()));
        self.closures.push(closure);
        id
    }

    #[inline]
    pub fn get(&self, id: ClosureId) -> Option<&Closure> {
        self.closures.get(id.index())
    }

    /// Record a recursive group.
    pub fn add_fragment(&mut self, members: Vec<(Name, ClosureId)>) -> FragmentId {
        let id = FragmentId::from_raw(to_u32(self.fragments.len()));
        self.fragments.push(members);
        id
    }

    pub fn fragment(&self, id: FragmentId) -> Option<&[(Name, ClosureId)]> {
        self.fragments.get(id.index()).map(Vec::as_slice)
    }

    /// Bindings for every member of a recursive group, each closed over the
    /// group again.
    pub fn unfold(&self, id: FragmentId) -> Option<Environment> {
        let members = self.fragment(id)?;
        Some(
            members
                .iter()
                .map(|&(name, closure)| (name, Bindable::Closure(ClosureRef::recursive(closure, id))))
                .collect(),
        )
    }

    pub fn mark(&self) -> ClosureMark {
        ClosureMark {
            closures: self.closures.len(),
            fragments: self.fragments.len(),
        }
    }

    /// Drop every closure and fragment created since `mark` was taken.
    pub fn truncate(&mut self, mark: ClosureMark) {
        self.closures.truncate(mark.closures);
        self.fragments.truncate(mark.fragments);
    }

    pub fn len(&self) -> usize {
        self.closures.len()
    }

    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closures.is_empty()
    }
}

/// # Panics
/// Panics if a table outgrew `u32` indexing.
#[inline]
fn to_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("closure table overflow ({len})"))
}
