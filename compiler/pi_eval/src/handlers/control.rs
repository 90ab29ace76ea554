//! Conditionals and loops.
//!
//! Both park their own node on the value stack while the condition runs, so
//! the opcode can find the branches again.

use pi_ir::{NodeId, NodeKind, OpCode};

use crate::errors::{undefined_construct, EvalResult};
use crate::machine::Machine;
use crate::value::StackValue;

impl Machine<'_> {
    pub(super) fn park(&mut self, node: NodeId, op: OpCode, condition: NodeId) {
        self.values.push(StackValue::Pending(node));
        self.push_op(op);
        self.push_node(condition);
    }

    pub(super) fn apply_cond(&mut self) -> EvalResult {
        let condition = self.values.pop_boolean()?;
        let node = self.values.pop_pending()?;
        let NodeKind::Conditional {
            then_branch,
            else_branch,
            ..
        } = self.node(node)?
        else {
            return Err(undefined_construct("COND without a conditional"));
        };

        if condition {
            self.push_node(then_branch);
        } else if let Some(else_branch) = else_branch {
            self.push_node(else_branch);
        }
        Ok(())
    }

    /// On true run the body, then the whole loop again.
    pub(super) fn apply_loop(&mut self) -> EvalResult {
        let condition = self.values.pop_boolean()?;
        let node = self.values.pop_pending()?;
        let NodeKind::Loop { body, .. } = self.node(node)? else {
            return Err(undefined_construct("LOOP without a loop"));
        };

        if condition {
            self.push_node(node);
            self.push_node(body);
        }
        Ok(())
    }
}
