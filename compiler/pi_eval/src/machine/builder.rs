//! `MachineBuilder` for creating machines with non-default configuration.

use pi_ir::{Program, StringInterner};

use super::{Machine, MachineOptions};
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for [`Machine`].
///
/// Defaults: output to stdout, no step budget, snapshots attached to errors.
pub struct MachineBuilder<'p> {
    interner: &'p StringInterner,
    program: &'p Program,
    print_handler: Option<SharedPrintHandler>,
    options: MachineOptions,
}

impl<'p> MachineBuilder<'p> {
    pub fn new(interner: &'p StringInterner, program: &'p Program) -> Self {
        Self {
            interner,
            program,
            print_handler: None,
            options: MachineOptions::default(),
        }
    }

    /// Set where `Print` output goes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Replace all options at once.
    #[must_use]
    pub fn options(mut self, options: MachineOptions) -> Self {
        self.options = options;
        self
    }

    /// Abort after `limit` delta steps.
    #[must_use]
    pub fn max_steps(mut self, limit: usize) -> Self {
        self.options.max_steps = Some(limit);
        self
    }

    pub fn build(self) -> Machine<'p> {
        let print_handler = self.print_handler.unwrap_or_else(stdout_handler);
        Machine::from_parts(self.interner, self.program, print_handler, self.options)
    }
}
