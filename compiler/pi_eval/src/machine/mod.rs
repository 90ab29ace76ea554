//! The automaton driver.
//!
//! A [`Machine`] owns the control stack, the value stack and the memory
//! model, and borrows the program it runs. Each call to [`Machine::step`]
//! pops one control entry and applies its transition (a delta step). The
//! machine halts when the control stack is empty; the top of the value stack,
//! if any, is the result.
//!
//! The loop is iterative: nesting depth of the program costs control-stack
//! entries, not native stack frames.

mod builder;
mod options;
mod snapshot;
mod value_stack;

use std::fmt;

use tracing::trace;

use pi_ir::{Name, NodeId, OpCode, Program, StringInterner};

use crate::errors::{step_budget_exceeded, undefined_variable, EvalError, EvalResult};
use crate::memory::{ClosureTable, LocationSet, Storage};
use crate::print_handler::SharedPrintHandler;
use crate::value::{Bindable, Location, Storable};
use crate::Environment;

pub use builder::MachineBuilder;
pub use options::MachineOptions;
pub use snapshot::Snapshot;
pub use value_stack::ValueStack;

/// An entry on the control stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    /// A node still to be evaluated.
    Node(NodeId),
    /// A continuation waiting for its operands on the value stack.
    Op(OpCode),
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Control::Node(id) => write!(f, "node({})", id.raw()),
            Control::Op(op) => write!(f, "{op}"),
        }
    }
}

/// Result of a completed run.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    /// Top of the value stack at halt.
    pub result: Option<Bindable>,
    /// Delta steps executed.
    pub steps: usize,
}

/// The abstract machine.
pub struct Machine<'p> {
    pub(crate) program: &'p Program,
    pub(crate) interner: &'p StringInterner,
    pub(crate) control: Vec<Control>,
    pub(crate) values: ValueStack,
    pub(crate) storage: Storage,
    pub(crate) env: Environment,
    pub(crate) locations: LocationSet,
    pub(crate) closures: ClosureTable,
    pub(crate) print_handler: SharedPrintHandler,
    options: MachineOptions,
    steps: usize,
}

impl<'p> Machine<'p> {
    /// A machine loaded with `program`, printing to stdout.
    pub fn new(interner: &'p StringInterner, program: &'p Program) -> Self {
        MachineBuilder::new(interner, program).build()
    }

    fn from_parts(
        interner: &'p StringInterner,
        program: &'p Program,
        print_handler: SharedPrintHandler,
        options: MachineOptions,
    ) -> Self {
        Machine {
            program,
            interner,
            control: vec![Control::Node(program.root)],
            values: ValueStack::new(),
            storage: Storage::new(),
            env: Environment::new(),
            locations: LocationSet::new(),
            closures: ClosureTable::new(),
            print_handler,
            options,
            steps: 0,
        }
    }

    /// Whether the control stack is empty.
    pub fn is_halted(&self) -> bool {
        self.control.is_empty()
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn options(&self) -> &MachineOptions {
        &self.options
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Execute one delta step.
    ///
    /// Returns `Ok(false)` without doing anything once the machine has halted.
    /// A failed step leaves the machine in the state the error snapshot shows.
    pub fn step(&mut self) -> EvalResult<bool> {
        let Some(&entry) = self.control.last() else {
            return Ok(false);
        };
        if self.options.is_exhausted(self.steps) {
            let limit = self.options.max_steps.unwrap_or(self.steps);
            return Err(self.annotate(step_budget_exceeded(limit)));
        }

        self.control.pop();
        self.steps += 1;
        trace!(step = self.steps, %entry, "delta");

        let result = match entry {
            Control::Node(id) => self.eval_node(id),
            Control::Op(op) => self.eval_op(op),
        };
        match result {
            Ok(()) => Ok(true),
            Err(err) => Err(self.annotate(err)),
        }
    }

    /// Run until the control stack is empty.
    #[tracing::instrument(level = "debug", skip_all, fields(root = self.program.root.raw()))]
    pub fn run(&mut self) -> EvalResult<Outcome> {
        while self.step()? {}
        Ok(self.outcome())
    }

    /// Run until the control stack is empty, handing `observer` the initial
    /// state and the state after every step.
    #[tracing::instrument(level = "debug", skip_all, fields(root = self.program.root.raw()))]
    pub fn run_observed<F>(&mut self, mut observer: F) -> EvalResult<Outcome>
    where
        F: FnMut(&Snapshot),
    {
        observer(&self.snapshot());
        while self.step()? {
            observer(&self.snapshot());
        }
        Ok(self.outcome())
    }

    /// Current machine state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            step_count: self.steps,
            control_stack: self.control.clone(),
            value_stack: self.values.as_slice().to_vec(),
            storage: self.storage.iter().collect(),
            environment: self.env.sorted(),
            pending_locations: self.locations.as_slice().to_vec(),
        }
    }

    fn outcome(&self) -> Outcome {
        Outcome {
            result: self.values.peek().and_then(|value| value.as_bindable()),
            steps: self.steps,
        }
    }

    fn annotate(&self, err: EvalError) -> EvalError {
        let err = err.at_step(self.steps);
        if self.options.snapshot_on_error {
            err.with_snapshot(self.snapshot())
        } else {
            err
        }
    }

    // Helpers shared by the handlers

    /// Source text of an interned name.
    pub(crate) fn name_str(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    /// Resolve `name` in the current environment.
    pub(crate) fn lookup(&self, name: Name) -> EvalResult<Bindable> {
        self.env
            .lookup(name)
            .ok_or_else(|| undefined_variable(self.name_str(name)))
    }

    /// Allocate a storage cell owned by the innermost open block.
    pub(crate) fn allocate(&mut self, value: Storable) -> Location {
        let location = self.storage.allocate(value);
        self.locations.push(location);
        location
    }

    #[inline]
    pub(crate) fn push_node(&mut self, id: NodeId) {
        self.control.push(Control::Node(id));
    }

    #[inline]
    pub(crate) fn push_op(&mut self, op: OpCode) {
        self.control.push(Control::Op(op));
    }
}

