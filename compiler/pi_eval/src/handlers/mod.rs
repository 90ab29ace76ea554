//! Transition rules.
//!
//! One handler per node kind and per opcode, grouped by concern. Node
//! handlers push continuations and operands; opcode handlers consume operand
//! results from the value stack. Binary nodes push `OP, lhs, rhs`, so the
//! right operand runs first and the left result ends up on top: an opcode
//! pops `lhs` then `rhs` and pushes `f(lhs, rhs)`.

mod arith;
mod assign;
mod block;
mod call;
mod control;
mod logic;
mod print;
mod reference;

pub use arith::evaluate_arith;

use pi_ir::{NodeId, NodeKind, OpCode};

use crate::errors::{undefined_construct, EvalResult};
use crate::machine::Machine;
use crate::value::StackValue;

impl Machine<'_> {
    /// Resolve a node id against the program arena.
    pub(crate) fn node(&self, id: NodeId) -> EvalResult<NodeKind> {
        self.program
            .arena
            .get(id)
            .copied()
            .ok_or_else(|| undefined_construct(&format!("node {}", id.raw())))
    }

    pub(crate) fn eval_node(&mut self, id: NodeId) -> EvalResult {
        match self.node(id)? {
            NodeKind::Identifier(name) => self.eval_identifier(name),
            NodeKind::Number(n) => {
                self.values.push(StackValue::Number(n));
                Ok(())
            }
            NodeKind::Truth(b) => {
                self.values.push(StackValue::Boolean(b));
                Ok(())
            }
            NodeKind::Arith { op, lhs, rhs } => {
                self.push_binary(OpCode::Arith(op), lhs, rhs);
                Ok(())
            }
            NodeKind::Logic { op, lhs, rhs } => {
                self.push_binary(OpCode::Logic(op), lhs, rhs);
                Ok(())
            }
            NodeKind::Not(operand) => {
                self.push_op(OpCode::Not);
                self.push_node(operand);
                Ok(())
            }
            NodeKind::AddressOf(name) => self.eval_address_of(name),
            NodeKind::ValueOf(name) => self.eval_value_of(name),
            NodeKind::AllocateReference(value) => {
                self.push_op(OpCode::Ref);
                self.push_node(value);
                Ok(())
            }
            NodeKind::NoOp => Ok(()),
            NodeKind::Assign { target, value } => {
                self.eval_assign(target, value);
                Ok(())
            }
            NodeKind::Sequence { first, second } => {
                self.push_node(second);
                self.push_node(first);
                Ok(())
            }
            NodeKind::Conditional { condition, .. } => {
                self.park(id, OpCode::Cond, condition);
                Ok(())
            }
            NodeKind::Loop { condition, .. } => {
                self.park(id, OpCode::Loop, condition);
                Ok(())
            }
            NodeKind::Block {
                declarations,
                commands,
            } => {
                self.eval_block(declarations, commands);
                Ok(())
            }
            NodeKind::Print(value) => {
                self.push_op(OpCode::Print);
                self.push_node(value);
                Ok(())
            }
            NodeKind::Call { callee, actuals } => {
                self.eval_call(callee, actuals);
                Ok(())
            }
            NodeKind::Bind { name, value } => {
                self.eval_bind(name, value);
                Ok(())
            }
            NodeKind::RecBind(bindings) => self.eval_rec_bind(id, bindings),
            NodeKind::Abstraction { formals, body } => {
                self.eval_abstraction(formals, body);
                Ok(())
            }
        }
    }

    pub(crate) fn eval_op(&mut self, op: OpCode) -> EvalResult {
        match op {
            OpCode::Arith(op) => self.apply_arith(op),
            OpCode::Logic(op) => self.apply_logic(op),
            OpCode::Not => self.apply_not(),
            OpCode::Assign => self.apply_assign(),
            OpCode::Bind => self.apply_bind(),
            OpCode::RecBind(node) => self.apply_rec_bind(node),
            OpCode::Ref => self.apply_ref(),
            OpCode::BlkDec => self.apply_blkdec(),
            OpCode::BlkCmd => self.apply_blkcmd(),
            OpCode::Cond => self.apply_cond(),
            OpCode::Loop => self.apply_loop(),
            OpCode::Print => self.apply_print(),
            OpCode::Call { callee, arity } => self.apply_call(callee, arity),
        }
    }

    /// `OP, lhs, rhs`: the right operand is evaluated first.
    fn push_binary(&mut self, op: OpCode, lhs: NodeId, rhs: NodeId) {
        self.push_op(op);
        self.push_node(lhs);
        self.push_node(rhs);
    }
}

