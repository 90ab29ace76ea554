//! IR node kinds and operation codes.
//!
//! `NodeKind` is the closed set of constructs the machine executes.
//! `OpCode` is the closed set of continuations pushed on the control stack:
//! an opcode runs only after the operands pushed above it have left their
//! results on the value stack.

use std::fmt;

use crate::{BindingRange, Name, NameRange, NodeId, NodeRange};

/// Arithmetic operators. Operands and result are numbers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Mul,
    Div,
    Sum,
    Sub,
}

impl ArithOp {
    /// Opcode mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            ArithOp::Mul => "MUL",
            ArithOp::Div => "DIV",
            ArithOp::Sum => "SUM",
            ArithOp::Sub => "SUB",
        }
    }
}

/// Logical operators. The result is a boolean.
///
/// `Lt`/`Le`/`Gt`/`Ge` compare numbers, `And`/`Or` combine booleans,
/// `Eq` accepts two numbers or two booleans.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LogicOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    And,
    Or,
}

impl LogicOp {
    /// Opcode mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            LogicOp::Lt => "LT",
            LogicOp::Le => "LE",
            LogicOp::Gt => "GT",
            LogicOp::Ge => "GE",
            LogicOp::Eq => "EQ",
            LogicOp::And => "AND",
            LogicOp::Or => "OR",
        }
    }

    /// Whether the operator compares two numbers.
    pub const fn is_comparison(self) -> bool {
        matches!(self, LogicOp::Lt | LogicOp::Le | LogicOp::Gt | LogicOp::Ge)
    }
}

/// An IR node.
///
/// Children are `NodeId`s into the owning [`IrArena`](crate::IrArena), so a
/// `NodeKind` is `Copy` and never owns a subtree.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NodeKind {
    // Atoms
    Identifier(Name),
    Number(f64),
    Truth(bool),

    // Expressions
    Arith {
        op: ArithOp,
        lhs: NodeId,
        rhs: NodeId,
    },
    Logic {
        op: LogicOp,
        lhs: NodeId,
        rhs: NodeId,
    },
    Not(NodeId),

    // References
    /// `&x`: the `Location` bound to `x`.
    AddressOf(Name),
    /// `*x`: `x` holds a location whose cell holds another location; read through both.
    ValueOf(Name),
    /// Allocate a fresh storage cell holding the value of the operand.
    AllocateReference(NodeId),

    // Commands
    NoOp,
    Assign {
        target: Name,
        value: NodeId,
    },
    /// Left-to-right sequencing of commands or declarations.
    Sequence {
        first: NodeId,
        second: NodeId,
    },
    Conditional {
        condition: NodeId,
        then_branch: NodeId,
        else_branch: Option<NodeId>,
    },
    Loop {
        condition: NodeId,
        body: NodeId,
    },
    Block {
        declarations: NodeId,
        commands: NodeId,
    },
    Print(NodeId),
    Call {
        callee: Name,
        actuals: NodeRange,
    },

    // Declarations
    Bind {
        name: Name,
        value: NodeId,
    },
    /// A group of `(name, Abstraction)` pairs, recursive over the whole group.
    RecBind(BindingRange),

    // Closures
    /// Function abstraction; `body` is a `Block`.
    Abstraction {
        formals: NameRange,
        body: NodeId,
    },
}

impl NodeKind {
    /// Short label for the node kind, used in traces and errors.
    pub const fn label(&self) -> &'static str {
        match self {
            NodeKind::Identifier(_) => "Identifier",
            NodeKind::Number(_) => "Number",
            NodeKind::Truth(_) => "Truth",
            NodeKind::Arith { .. } => "Arith",
            NodeKind::Logic { .. } => "Logic",
            NodeKind::Not(_) => "Not",
            NodeKind::AddressOf(_) => "AddressOf",
            NodeKind::ValueOf(_) => "ValueOf",
            NodeKind::AllocateReference(_) => "AllocateReference",
            NodeKind::NoOp => "NoOp",
            NodeKind::Assign { .. } => "Assign",
            NodeKind::Sequence { .. } => "Sequence",
            NodeKind::Conditional { .. } => "Conditional",
            NodeKind::Loop { .. } => "Loop",
            NodeKind::Block { .. } => "Block",
            NodeKind::Print(_) => "Print",
            NodeKind::Call { .. } => "Call",
            NodeKind::Bind { .. } => "Bind",
            NodeKind::RecBind(_) => "RecBind",
            NodeKind::Abstraction { .. } => "Abstraction",
        }
    }
}

/// Control-stack continuation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpCode {
    Arith(ArithOp),
    Logic(LogicOp),
    Not,
    Assign,
    Bind,
    /// Finish a `RecBind` node: the closures of its group are on the value stack.
    RecBind(NodeId),
    Ref,
    BlkDec,
    BlkCmd,
    Cond,
    Loop,
    Print,
    /// Call `callee` with `arity` evaluated actuals on the value stack.
    Call {
        callee: Name,
        arity: u32,
    },
}

impl OpCode {
    /// Opcode mnemonic.
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            OpCode::Arith(op) => op.mnemonic(),
            OpCode::Logic(op) => op.mnemonic(),
            OpCode::Not => "NOT",
            OpCode::Assign => "ASSIGN",
            OpCode::Bind => "BIND",
            OpCode::RecBind(_) => "RBND",
            OpCode::Ref => "REF",
            OpCode::BlkDec => "BLKDEC",
            OpCode::BlkCmd => "BLKCMD",
            OpCode::Cond => "COND",
            OpCode::Loop => "LOOP",
            OpCode::Print => "PRINT",
            OpCode::Call { .. } => "CALL",
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpCode::Call { callee, arity } => write!(f, "#CALL({}, {arity})", callee.raw()),
            OpCode::RecBind(node) => write!(f, "#RBND({})", node.raw()),
            other => write!(f, "#{}", other.mnemonic()),
        }
    }
}
