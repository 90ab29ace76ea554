//! Closures and calls.

use tracing::debug;

use pi_ir::{BindingRange, Name, NameRange, NodeId, NodeKind, NodeRange, OpCode};

use crate::errors::{
    excess_parameters_in_call, expected_function_identifier, missing_parameters_in_call,
    undefined_construct, EvalResult,
};
use crate::machine::Machine;
use crate::memory::Closure;
use crate::value::{Bindable, ClosureRef, StackValue};

impl Machine<'_> {
    /// Close over the current environment.
    pub(super) fn eval_abstraction(&mut self, formals: NameRange, body: NodeId) {
        let id = self.closures.insert(Closure {
            formals,
            body,
            captured: self.env.clone(),
        });
        self.values.push(StackValue::Closure(ClosureRef::plain(id)));
    }

    /// Evaluate every abstraction of the group, then finish at `RBND`.
    pub(super) fn eval_rec_bind(&mut self, node: NodeId, bindings: BindingRange) -> EvalResult {
        let program = self.program;
        let group = program.arena.bindings(bindings);
        for &(_, abstraction) in group {
            if !matches!(self.node(abstraction)?, NodeKind::Abstraction { .. }) {
                return Err(undefined_construct("recursive binding of a non-function"));
            }
        }

        self.push_op(OpCode::RecBind(node));
        for &(_, abstraction) in group {
            self.push_node(abstraction);
        }
        Ok(())
    }

    /// `RBND`: record the group as a fragment and bind every member to a
    /// closure that reopens it.
    pub(super) fn apply_rec_bind(&mut self, node: NodeId) -> EvalResult {
        let NodeKind::RecBind(bindings) = self.node(node)? else {
            return Err(undefined_construct("RBND without a recursive binding"));
        };
        let program = self.program;
        let group = program.arena.bindings(bindings);

        // The first member's closure is on top.
        let mut members = Vec::with_capacity(group.len());
        for &(name, _) in group {
            let closure = self.values.pop_closure()?;
            members.push((name, closure.id));
        }

        let fragment = self.closures.add_fragment(members.clone());
        let declarations = self.values.declarations_mut()?;
        for (name, id) in members {
            declarations.bind(name, Bindable::Closure(ClosureRef::recursive(id, fragment)));
        }
        Ok(())
    }

    /// Push `CALL` and the actuals; the last actual is evaluated first.
    pub(super) fn eval_call(&mut self, callee: Name, actuals: NodeRange) {
        let program = self.program;
        let actuals = program.arena.nodes(actuals);
        self.push_op(OpCode::Call {
            callee,
            arity: u32::try_from(actuals.len()).unwrap_or(u32::MAX),
        });
        for &actual in actuals {
            self.push_node(actual);
        }
    }

    /// `CALL`: bind the formals over the callee's captured environment and run
    /// the body inside a `BLKCMD` bracket.
    pub(super) fn apply_call(&mut self, callee: Name, arity: u32) -> EvalResult {
        let program = self.program;
        let name = self.name_str(callee);
        let Bindable::Closure(closure_ref) = self.lookup(callee)? else {
            return Err(expected_function_identifier(name));
        };
        let closure = self
            .closures
            .get(closure_ref.id)
            .ok_or_else(|| undefined_construct(&format!("closure {}", closure_ref.id.raw())))?;

        let formals = program.arena.names(closure.formals);
        let got = arity as usize;
        if got < formals.len() {
            return Err(missing_parameters_in_call(name, formals.len(), got));
        }
        if got > formals.len() {
            return Err(excess_parameters_in_call(name, formals.len(), got));
        }

        let mut env = closure.captured.clone();
        if let Some(fragment) = closure_ref.recursive {
            let group = self
                .closures
                .unfold(fragment)
                .ok_or_else(|| undefined_construct(&format!("fragment {}", fragment.raw())))?;
            env.extend(group);
        }
        let body = closure.body;
        for &formal in formals {
            let actual = self.values.pop_bindable()?;
            env.bind(formal, actual);
        }

        debug!(callee = name, arity, recursive = closure_ref.is_recursive(), "call");
        let caller_env = std::mem::replace(&mut self.env, env);
        self.values.push(StackValue::Environment(caller_env));
        self.values.push(StackValue::Locations(self.locations.take()));
        self.values.push(StackValue::Closures(self.closures.mark()));
        self.push_op(OpCode::BlkCmd);
        self.push_node(body);
        Ok(())
    }
}
