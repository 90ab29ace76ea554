//! Address-indexed storage.
//!
//! Addresses come from a single counter and are never reused. Freeing a cell
//! empties its slot, so a stale [`Location`] reads as undefined instead of
//! aliasing a newer allocation.

use crate::errors::{undefined_storage_address, EvalResult};
use crate::value::{Location, Storable};

/// Storage cells, indexed by address.
#[derive(Clone, Debug, Default)]
pub struct Storage {
    cells: Vec<Option<Storable>>,
}

impl Storage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` at the next address.
    pub fn allocate(&mut self, value: Storable) -> Location {
        let location = Location::new(self.cells.len());
        self.cells.push(Some(value));
        location
    }

    pub fn read(&self, location: Location) -> EvalResult<Storable> {
        self.cells
            .get(location.address)
            .copied()
            .flatten()
            .ok_or_else(|| undefined_storage_address(location.address))
    }

    /// Overwrite a live cell.
    pub fn write(&mut self, location: Location, value: Storable) -> EvalResult {
        match self.cells.get_mut(location.address) {
            Some(cell @ Some(_)) => {
                *cell = Some(value);
                Ok(())
            }
            _ => Err(undefined_storage_address(location.address)),
        }
    }

    /// Empty a cell. Freeing an empty or unknown address is a no-op.
    pub fn free(&mut self, location: Location) {
        if let Some(cell) = self.cells.get_mut(location.address) {
            *cell = None;
        }
    }

    pub fn is_live(&self, location: Location) -> bool {
        matches!(self.cells.get(location.address), Some(Some(_)))
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Live cells in address order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, Storable)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(address, cell)| cell.map(|value| (Location::new(address), value)))
    }
}

/// Addresses allocated since the innermost block or call was entered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationSet {
    locations: Vec<Location>,
}

impl LocationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, location: Location) {
        self.locations.push(location);
    }

    /// Take the current set, leaving an empty one behind.
    pub fn take(&mut self) -> LocationSet {
        std::mem::take(self)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn as_slice(&self) -> &[Location] {
        &self.locations
    }

    /// Free every address in the set from `storage`.
    pub fn release(&self, storage: &mut Storage) {
        for &location in &self.locations {
            storage.free(location);
        }
    }
}
