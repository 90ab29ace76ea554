//! Runtime configuration of a machine.

/// Knobs a host can set through [`MachineBuilder`](crate::MachineBuilder).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MachineOptions {
    /// Maximum number of delta steps before the run aborts with
    /// `StepBudgetExceeded`. `None` runs until the control stack is empty.
    pub max_steps: Option<usize>,
    /// Attach a [`Snapshot`](crate::Snapshot) of the failing state to errors.
    pub snapshot_on_error: bool,
}

impl MachineOptions {
    /// No step budget, snapshots on error.
    pub const fn unbounded() -> Self {
        MachineOptions {
            max_steps: None,
            snapshot_on_error: true,
        }
    }

    #[must_use]
    pub const fn with_max_steps(mut self, limit: usize) -> Self {
        self.max_steps = Some(limit);
        self
    }

    #[must_use]
    pub const fn with_snapshot_on_error(mut self, enabled: bool) -> Self {
        self.snapshot_on_error = enabled;
        self
    }

    /// Whether `steps` delta steps already exhaust the budget.
    #[inline]
    pub fn is_exhausted(&self, steps: usize) -> bool {
        self.max_steps.is_some_and(|limit| steps >= limit)
    }
}

impl Default for MachineOptions {
    fn default() -> Self {
        Self::unbounded()
    }
}
