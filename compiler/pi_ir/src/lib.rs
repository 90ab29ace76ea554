//! Pi IR - Intermediate Representation Types
//!
//! This crate contains the data the Pi abstract machine is built from:
//! - Names for interned identifiers
//! - The surface AST handed over by the parser (`ast`)
//! - The flat IR executed by the machine (`NodeKind`, `OpCode`)
//! - Arena allocation for IR nodes (`IrArena`, `Program`)
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers are `Name(u32)`
//! - **Flatten Everything**: no `Box<Node>`, children are `NodeId(u32)` indices
//! - **Immutable after construction**: the translator builds a `Program` once,
//!   the machine only reads it
//!
//! The surface AST is the exception to flattening: it is the contract with the
//! external parser, so it stays an ordinary owned tree.

mod arena;
pub mod ast;
mod interner;
mod ir;
mod name;
mod node_id;

pub use arena::{IrArena, Program};
pub use interner::StringInterner;
pub use ir::{ArithOp, LogicOp, NodeKind, OpCode};
pub use name::Name;
pub use node_id::{BindingRange, NameRange, NodeId, NodeRange};
