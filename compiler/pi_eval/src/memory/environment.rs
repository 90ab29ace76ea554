//! Name environment.
//!
//! A flat map from [`Name`] to [`Bindable`]. The machine never mutates it in
//! place while a block runs: blocks and calls swap whole environments in and
//! out, and declarations accumulate into a separate `Environment` that is
//! merged in at `BLKDEC`.

use rustc_hash::FxHashMap;

use pi_ir::Name;

use crate::value::Bindable;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Environment {
    bindings: FxHashMap<Name, Bindable>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Bindable> {
        self.bindings.get(&name).copied()
    }

    /// Bind `name`, replacing any earlier binding.
    pub fn bind(&mut self, name: Name, value: Bindable) {
        self.bindings.insert(name, value);
    }

    /// Overlay `other` on top of `self`; bindings in `other` win.
    pub fn extend(&mut self, other: Environment) {
        self.bindings.extend(other.bindings);
    }

    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Name, Bindable)> + '_ {
        self.bindings.iter().map(|(&name, &value)| (name, value))
    }

    /// Bindings ordered by name, for deterministic snapshots.
    pub fn sorted(&self) -> Vec<(Name, Bindable)> {
        let mut bindings: Vec<_> = self.iter().collect();
        bindings.sort_by_key(|(name, _)| *name);
        bindings
    }
}

impl FromIterator<(Name, Bindable)> for Environment {
    fn from_iter<I: IntoIterator<Item = (Name, Bindable)>>(iter: I) -> Self {
        Environment {
            bindings: iter.into_iter().collect(),
        }
    }
}
