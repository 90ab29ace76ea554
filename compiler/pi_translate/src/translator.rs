//! Surface tree to IR.
//!
//! One pass, top down. Expressions return their [`OperandKind`] alongside the
//! node so the parent can check operator shapes without revisiting children.

use tracing::debug;

use pi_ir::ast::{BlockStmt, Cmd, Decl, Expr, FnDecl, SurfaceProgram};
use pi_ir::{IrArena, Name, NodeId, NodeKind, Program, StringInterner};

use crate::errors::{TranslateError, TranslateResult};
use crate::kind::{check_condition, check_not, BinaryOperator, OperandKind};
use crate::stack::ensure_sufficient_stack;

pub(crate) struct Translator<'a> {
    interner: &'a StringInterner,
    arena: IrArena,
}

impl<'a> Translator<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Translator {
            interner,
            arena: IrArena::new(),
        }
    }

    pub fn program(mut self, program: &SurfaceProgram) -> TranslateResult<Program> {
        let root = self.commands(&program.commands)?;
        debug!(nodes = self.arena.len(), "translated program");
        Ok(Program::new(self.arena, root))
    }

    fn intern(&self, name: &str) -> Name {
        self.interner.intern(name)
    }

    // Expressions

    /// An expression in value position: every kind is allowed, `&x` included.
    fn value(&mut self, expr: &Expr) -> TranslateResult<NodeId> {
        self.expr(expr).map(|(node, _)| node)
    }

    /// An expression used as an operand: `&x` is rejected by the operator check.
    fn expr(&mut self, expr: &Expr) -> TranslateResult<(NodeId, OperandKind)> {
        ensure_sufficient_stack(|| self.expr_inner(expr))
    }

    fn expr_inner(&mut self, expr: &Expr) -> TranslateResult<(NodeId, OperandKind)> {
        match expr {
            Expr::Ident(name) => {
                let name = self.intern(name);
                Ok((self.arena.alloc(NodeKind::Identifier(name)), OperandKind::Generic))
            }
            Expr::Num(n) => Ok((self.arena.alloc(NodeKind::Number(*n)), OperandKind::Arithmetic)),
            Expr::Bool(b) => Ok((self.arena.alloc(NodeKind::Truth(*b)), OperandKind::Logical)),
            Expr::Binary { op, lhs, rhs } => {
                let op = BinaryOperator::from_lexeme(op)?;
                let (lhs, lhs_kind) = self.expr(lhs)?;
                let (rhs, rhs_kind) = self.expr(rhs)?;
                let kind = op.check(lhs_kind, rhs_kind)?;
                let node = match op {
                    BinaryOperator::Arith(op) => NodeKind::Arith { op, lhs, rhs },
                    BinaryOperator::Logic(op) => NodeKind::Logic { op, lhs, rhs },
                };
                Ok((self.arena.alloc(node), kind))
            }
            Expr::Not(operand) => {
                let (operand, operand_kind) = self.expr(operand)?;
                let kind = check_not(operand_kind)?;
                Ok((self.arena.alloc(NodeKind::Not(operand)), kind))
            }
            Expr::AddressOf(name) => {
                let name = self.intern(name);
                Ok((self.arena.alloc(NodeKind::AddressOf(name)), OperandKind::Reference))
            }
            Expr::ValueOf(name) => {
                let name = self.intern(name);
                Ok((self.arena.alloc(NodeKind::ValueOf(name)), OperandKind::Generic))
            }
        }
    }

    fn condition(&mut self, construct: &str, expr: &Expr) -> TranslateResult<NodeId> {
        let (node, kind) = self.expr(expr)?;
        check_condition(construct, kind)?;
        Ok(node)
    }

    // Commands

    /// Left-nested `Sequence`; an empty list is `NoOp`.
    fn commands(&mut self, cmds: &[Cmd]) -> TranslateResult<NodeId> {
        let mut nodes = Vec::with_capacity(cmds.len());
        for cmd in cmds {
            nodes.push(self.command(cmd)?);
        }
        Ok(self.sequence(&nodes))
    }

    fn command(&mut self, cmd: &Cmd) -> TranslateResult<NodeId> {
        ensure_sufficient_stack(|| self.command_inner(cmd))
    }

    fn command_inner(&mut self, cmd: &Cmd) -> TranslateResult<NodeId> {
        let node = match cmd {
            Cmd::Nop => NodeKind::NoOp,
            Cmd::Assign(target, value) => {
                let value = self.value(value)?;
                NodeKind::Assign {
                    target: self.intern(target),
                    value,
                }
            }
            Cmd::While(condition, body) => {
                let condition = self.condition("LOOP", condition)?;
                let body = self.commands(body)?;
                NodeKind::Loop { condition, body }
            }
            Cmd::If(condition, then_cmds, else_cmds) => {
                let condition = self.condition("COND", condition)?;
                let then_branch = self.commands(then_cmds)?;
                let else_branch = match else_cmds {
                    Some(cmds) => Some(self.commands(cmds)?),
                    None => None,
                };
                NodeKind::Conditional {
                    condition,
                    then_branch,
                    else_branch,
                }
            }
            Cmd::Block(block) => return self.block(block),
            Cmd::Print(value) => NodeKind::Print(self.value(value)?),
            Cmd::Call(callee, actuals) => {
                let mut nodes = Vec::with_capacity(actuals.len());
                for actual in actuals {
                    nodes.push(self.value(actual)?);
                }
                NodeKind::Call {
                    callee: self.intern(callee),
                    actuals: self.arena.alloc_nodes(&nodes),
                }
            }
        };
        Ok(self.arena.alloc(node))
    }

    fn block(&mut self, block: &BlockStmt) -> TranslateResult<NodeId> {
        let mut decls = Vec::with_capacity(block.decls.len());
        for decl in &block.decls {
            decls.push(self.declaration(decl)?);
        }
        let declarations = self.sequence(&decls);
        let commands = self.commands(&block.cmds)?;
        Ok(self.arena.alloc(NodeKind::Block {
            declarations,
            commands,
        }))
    }

    fn sequence(&mut self, nodes: &[NodeId]) -> NodeId {
        let Some((&first, rest)) = nodes.split_first() else {
            return self.arena.alloc(NodeKind::NoOp);
        };
        rest.iter().fold(first, |first, &second| {
            self.arena.alloc(NodeKind::Sequence { first, second })
        })
    }

    // Declarations

    fn declaration(&mut self, decl: &Decl) -> TranslateResult<NodeId> {
        let node = match decl {
            Decl::Var(name, value) => {
                let value = self.value(value)?;
                let cell = self.arena.alloc(NodeKind::AllocateReference(value));
                NodeKind::Bind {
                    name: self.intern(name),
                    value: cell,
                }
            }
            Decl::Cons(name, value) => {
                let value = self.value(value)?;
                NodeKind::Bind {
                    name: self.intern(name),
                    value,
                }
            }
            Decl::Fn(function) => {
                let value = self.abstraction(function)?;
                NodeKind::Bind {
                    name: self.intern(&function.name),
                    value,
                }
            }
            Decl::Rec(group) => {
                if group.is_empty() {
                    return Err(TranslateError::EmptyRecursiveGroup);
                }
                let mut bindings = Vec::with_capacity(group.len());
                for function in group {
                    let abstraction = self.abstraction(function)?;
                    bindings.push((self.intern(&function.name), abstraction));
                }
                NodeKind::RecBind(self.arena.alloc_bindings(&bindings))
            }
        };
        Ok(self.arena.alloc(node))
    }

    fn abstraction(&mut self, function: &FnDecl) -> TranslateResult<NodeId> {
        let mut formals: Vec<Name> = Vec::with_capacity(function.formals.len());
        for formal in &function.formals {
            let name = self.intern(formal);
            if formals.contains(&name) {
                return Err(TranslateError::DuplicateFormal {
                    function: function.name.clone(),
                    formal: formal.clone(),
                });
            }
            formals.push(name);
        }
        let formals = self.arena.alloc_names(&formals);
        let body = self.block(&function.body)?;
        Ok(self.arena.alloc(NodeKind::Abstraction { formals, body }))
    }
}
