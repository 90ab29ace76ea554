//! Machine tests over hand-built IR.
//!
//! `ProgramBuilder` assembles arena nodes directly, so these tests pin down
//! the transition rules independently of the translator.

mod operator_tests;

use pi_ir::{ArithOp, IrArena, LogicOp, Name, NodeId, NodeKind, Program, StringInterner};

use crate::{buffer_handler, EvalResult, MachineBuilder, MachineOptions, Outcome};

pub(crate) struct ProgramBuilder {
    pub interner: StringInterner,
    pub arena: IrArena,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        ProgramBuilder {
            interner: StringInterner::new(),
            arena: IrArena::new(),
        }
    }

    pub fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    pub fn num(&mut self, n: f64) -> NodeId {
        self.arena.alloc(NodeKind::Number(n))
    }

    pub fn truth(&mut self, b: bool) -> NodeId {
        self.arena.alloc(NodeKind::Truth(b))
    }

    pub fn ident(&mut self, s: &str) -> NodeId {
        let name = self.name(s);
        self.arena.alloc(NodeKind::Identifier(name))
    }

    pub fn arith(&mut self, op: ArithOp, lhs: NodeId, rhs: NodeId) -> NodeId {
        self.arena.alloc(NodeKind::Arith { op, lhs, rhs })
    }

    pub fn logic(&mut self, op: LogicOp, lhs: NodeId, rhs: NodeId) -> NodeId {
        self.arena.alloc(NodeKind::Logic { op, lhs, rhs })
    }

    pub fn not(&mut self, operand: NodeId) -> NodeId {
        self.arena.alloc(NodeKind::Not(operand))
    }

    pub fn address_of(&mut self, s: &str) -> NodeId {
        let name = self.name(s);
        self.arena.alloc(NodeKind::AddressOf(name))
    }

    pub fn value_of(&mut self, s: &str) -> NodeId {
        let name = self.name(s);
        self.arena.alloc(NodeKind::ValueOf(name))
    }

    pub fn print(&mut self, value: NodeId) -> NodeId {
        self.arena.alloc(NodeKind::Print(value))
    }

    pub fn assign(&mut self, target: &str, value: NodeId) -> NodeId {
        let target = self.name(target);
        self.arena.alloc(NodeKind::Assign { target, value })
    }

    /// Left-nested sequence; empty is `NoOp`.
    pub fn seq(&mut self, items: &[NodeId]) -> NodeId {
        let Some((&first, rest)) = items.split_first() else {
            return self.arena.alloc(NodeKind::NoOp);
        };
        rest.iter().fold(first, |acc, &next| {
            self.arena.alloc(NodeKind::Sequence {
                first: acc,
                second: next,
            })
        })
    }

    pub fn cond(
        &mut self,
        condition: NodeId,
        then_branch: NodeId,
        else_branch: Option<NodeId>,
    ) -> NodeId {
        self.arena.alloc(NodeKind::Conditional {
            condition,
            then_branch,
            else_branch,
        })
    }

    pub fn while_loop(&mut self, condition: NodeId, body: NodeId) -> NodeId {
        self.arena.alloc(NodeKind::Loop { condition, body })
    }

    pub fn block(&mut self, decls: &[NodeId], cmds: &[NodeId]) -> NodeId {
        let declarations = self.seq(decls);
        let commands = self.seq(cmds);
        self.arena.alloc(NodeKind::Block {
            declarations,
            commands,
        })
    }

    /// `cons name = value`
    pub fn cons(&mut self, name: &str, value: NodeId) -> NodeId {
        let name = self.name(name);
        self.arena.alloc(NodeKind::Bind { name, value })
    }

    /// `var name = value`
    pub fn var(&mut self, name: &str, value: NodeId) -> NodeId {
        let cell = self.arena.alloc(NodeKind::AllocateReference(value));
        self.cons(name, cell)
    }

    pub fn abstraction(&mut self, formals: &[&str], body: NodeId) -> NodeId {
        let formals: Vec<Name> = formals.iter().map(|f| self.name(f)).collect();
        let formals = self.arena.alloc_names(&formals);
        self.arena.alloc(NodeKind::Abstraction { formals, body })
    }

    pub fn rec(&mut self, group: &[(&str, NodeId)]) -> NodeId {
        let group: Vec<(Name, NodeId)> = group.iter().map(|&(n, a)| (self.name(n), a)).collect();
        let bindings = self.arena.alloc_bindings(&group);
        self.arena.alloc(NodeKind::RecBind(bindings))
    }

    pub fn call(&mut self, callee: &str, actuals: &[NodeId]) -> NodeId {
        let callee = self.name(callee);
        let actuals = self.arena.alloc_nodes(actuals);
        self.arena.alloc(NodeKind::Call { callee, actuals })
    }

    pub fn finish(self, root: NodeId) -> (StringInterner, Program) {
        (self.interner, Program::new(self.arena, root))
    }
}

/// Run with captured output.
pub(crate) fn run(builder: ProgramBuilder, root: NodeId) -> (EvalResult<Outcome>, Vec<String>) {
    run_with(builder, root, MachineOptions::default())
}

pub(crate) fn run_with(
    builder: ProgramBuilder,
    root: NodeId,
    options: MachineOptions,
) -> (EvalResult<Outcome>, Vec<String>) {
    let (interner, program) = builder.finish(root);
    let output = buffer_handler();
    let result = MachineBuilder::new(&interner, &program)
        .print_handler(output.clone())
        .options(options)
        .build()
        .run();
    (result, output.lines())
}
