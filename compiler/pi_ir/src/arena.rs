//! Arena for IR nodes.
//!
//! All nodes of a program live in one `Vec<NodeKind>` indexed by [`NodeId`].
//! Variable-length children (call actuals, formals, recursive groups) are
//! flattened into side tables and referenced by ranges.

use crate::{BindingRange, Name, NameRange, NodeId, NodeKind, NodeRange};

/// Convert a table length to a `u32` index.
///
/// # Panics
/// Panics if the table outgrew `u32` indexing.
#[inline]
fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("IR arena: too many {what} ({len})"))
}

/// Arena for IR nodes.
///
/// # Index Spaces
///
/// - `nodes`: indexed by [`NodeId`]
/// - `node_lists`: flat `Vec<NodeId>` indexed by [`NodeRange`]
/// - `names`: flat `Vec<Name>` indexed by [`NameRange`]
/// - `bindings`: flat `Vec<(Name, NodeId)>` indexed by [`BindingRange`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IrArena {
    nodes: Vec<NodeKind>,
    node_lists: Vec<NodeId>,
    names: Vec<Name>,
    bindings: Vec<(Name, NodeId)>,
}

impl IrArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node, returning its ID.
    pub fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId::new(to_u32(self.nodes.len(), "nodes"));
        self.nodes.push(kind);
        id
    }

    /// Get a node kind, or `None` if the ID does not belong to this arena.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(id.index())
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no nodes have been allocated.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a contiguous list of node IDs.
    pub fn alloc_nodes(&mut self, ids: &[NodeId]) -> NodeRange {
        if ids.is_empty() {
            return NodeRange::EMPTY;
        }
        let start = to_u32(self.node_lists.len(), "node list entries");
        self.node_lists.extend_from_slice(ids);
        NodeRange::new(start, to_u32(ids.len(), "node list entries"))
    }

    /// Get node IDs from a range.
    pub fn nodes(&self, range: NodeRange) -> &[NodeId] {
        slice(&self.node_lists, range.start, range.len())
    }

    /// Allocate a contiguous list of names.
    pub fn alloc_names(&mut self, names: &[Name]) -> NameRange {
        if names.is_empty() {
            return NameRange::EMPTY;
        }
        let start = to_u32(self.names.len(), "names");
        self.names.extend_from_slice(names);
        NameRange::new(start, to_u32(names.len(), "names"))
    }

    /// Get names from a range.
    pub fn names(&self, range: NameRange) -> &[Name] {
        slice(&self.names, range.start, range.len())
    }

    /// Allocate a contiguous list of `(name, node)` bindings.
    pub fn alloc_bindings(&mut self, bindings: &[(Name, NodeId)]) -> BindingRange {
        if bindings.is_empty() {
            return BindingRange::EMPTY;
        }
        let start = to_u32(self.bindings.len(), "bindings");
        self.bindings.extend_from_slice(bindings);
        BindingRange::new(start, to_u32(bindings.len(), "bindings"))
    }

    /// Get bindings from a range.
    pub fn bindings(&self, range: BindingRange) -> &[(Name, NodeId)] {
        slice(&self.bindings, range.start, range.len())
    }
}

/// Sub-slice of a side table; out-of-range requests yield an empty slice.
fn slice<T>(table: &[T], start: u32, len: usize) -> &[T] {
    let start = start as usize;
    table.get(start..start + len).unwrap_or(&[])
}

/// A translated program: the arena plus the node execution starts from.
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    pub arena: IrArena,
    pub root: NodeId,
}

impl Program {
    /// Bundle an arena with its root node.
    pub fn new(arena: IrArena, root: NodeId) -> Self {
        Program { arena, root }
    }
}
