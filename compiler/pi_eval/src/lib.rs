//! Pi Eval - the Pi abstract machine.
//!
//! A small-step evaluator over an explicit control stack, value stack,
//! address-indexed storage and a name environment. The machine executes a
//! [`Program`](pi_ir::Program) produced by `pi_translate`.
//!
//! # Architecture
//!
//! - [`Machine`]: the driver; one [`Machine::step`] is one delta transition
//! - `handlers`: the transition rule of every node kind and opcode
//! - `memory`: [`Storage`], [`Environment`], [`ClosureTable`]
//! - [`Snapshot`]: read-only view of the machine for hosts that trace runs
//! - [`PrintHandler`]: where `Print` output goes
//!
//! # Example
//!
//! ```ignore
//! let program = pi_translate::translate(&interner, &surface)?;
//! let outcome = pi_eval::execute(&interner, &program)?;
//! ```

pub mod errors;
mod handlers;
mod machine;
mod memory;
mod print_handler;
mod value;

use std::sync::Once;

use pi_ir::{Program, StringInterner};

pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use handlers::evaluate_arith;
pub use machine::{
    Control, Machine, MachineBuilder, MachineOptions, Outcome, Snapshot, ValueStack,
};
pub use memory::{
    Closure, ClosureMark, ClosureTable, Environment, EnvironmentSnapshot, LocationSet,
    LocationSetSnapshot,
    Storage,
};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use value::{Bindable, ClosureId, ClosureRef, FragmentId, Location, StackValue, Storable};

/// Run `program` to completion, printing to stdout.
#[tracing::instrument(level = "debug", skip_all)]
pub fn execute(interner: &StringInterner, program: &Program) -> EvalResult<Outcome> {
    Machine::new(interner, program).run()
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, and only the first call has any
/// effect. Use `RUST_LOG=pi_eval=trace` to see every delta step.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

#[cfg(test)]
mod tests;
