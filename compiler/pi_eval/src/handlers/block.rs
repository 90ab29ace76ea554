//! Block entry and exit.
//!
//! Entry saves the environment, the allocation list and the closure table
//! size on the value stack and opens an empty declarations accumulator. Every declaration of the block
//! sees the environment in force at entry; `BLKDEC` merges the accumulated
//! bindings in one go. `BLKCMD` closes both blocks and calls.

use tracing::debug;

use pi_ir::{NodeId, OpCode};

use crate::errors::EvalResult;
use crate::machine::Machine;
use crate::value::StackValue;
use crate::Environment;

impl Machine<'_> {
    pub(super) fn eval_block(&mut self, declarations: NodeId, commands: NodeId) {
        debug!(depth = self.control.len(), "block enter");
        self.values.push(StackValue::Environment(self.env.clone()));
        self.values.push(StackValue::Locations(self.locations.take()));
        self.values.push(StackValue::Closures(self.closures.mark()));
        self.values.push(StackValue::Declarations(Environment::new()));

        self.push_op(OpCode::BlkCmd);
        self.push_node(commands);
        self.push_op(OpCode::BlkDec);
        self.push_node(declarations);
    }

    /// Bring the block's declarations into scope.
    pub(super) fn apply_blkdec(&mut self) -> EvalResult {
        let declarations = self.values.pop_declarations()?;
        self.env.extend(declarations);
        Ok(())
    }

    /// Free what the block allocated and the closures it created, then restore
    /// the outer allocation list and environment.
    pub(super) fn apply_blkcmd(&mut self) -> EvalResult {
        let mark = self.values.pop_closure_mark()?;
        let saved_locations = self.values.pop_locations()?;
        let saved_env = self.values.pop_environment()?;

        let released = std::mem::replace(&mut self.locations, saved_locations);
        released.release(&mut self.storage);
        self.env = saved_env;
        self.closures.truncate(mark);

        debug!(freed = released.len(), closures = self.closures.len(), "block exit");
        Ok(())
    }
}
