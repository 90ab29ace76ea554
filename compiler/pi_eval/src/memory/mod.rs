//! Memory model of the abstract machine.
//!
//! - [`Storage`]: address-indexed cells holding storable values
//! - [`LocationSet`]: the addresses allocated by the innermost open block
//! - [`Environment`]: name to bindable map
//! - [`ClosureTable`]: closures and the fragments of recursive groups
//!
//! All four are owned by the machine and mutated only by handlers.

mod closures;
mod environment;
mod storage;

pub use closures::{Closure, ClosureMark, ClosureTable};
pub use environment::Environment;
pub use storage::{LocationSet, Storage};

/// Environment saved at block or call entry, restored at `BLKCMD`.
pub type EnvironmentSnapshot = Environment;

/// Allocation list saved at block or call entry, restored at `BLKCMD`.
pub type LocationSetSnapshot = LocationSet;
