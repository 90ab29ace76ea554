//! Point-in-time view of the machine.
//!
//! The machine never formats its own state. Hosts that want a trace take a
//! [`Snapshot`] (directly, through `run_observed`, or from a failed run's
//! error) and render it however they like.

use pi_ir::Name;

use super::Control;
use crate::value::{Bindable, Location, StackValue, Storable};

/// Machine state after `step_count` delta steps.
///
/// Stacks are listed bottom to top; storage is in address order; the
/// environment is sorted by name.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub step_count: usize,
    pub control_stack: Vec<Control>,
    pub value_stack: Vec<StackValue>,
    pub storage: Vec<(Location, Storable)>,
    pub environment: Vec<(Name, Bindable)>,
    /// Addresses the innermost open block will free on exit.
    pub pending_locations: Vec<Location>,
}

impl Snapshot {
    /// The entry the next step will execute.
    pub fn next_control(&self) -> Option<Control> {
        self.control_stack.last().copied()
    }

    pub fn is_final(&self) -> bool {
        self.control_stack.is_empty()
    }
}
