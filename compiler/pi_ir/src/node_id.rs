//! Node IDs and ranges for the flat IR.
//!
//! - `NodeId(u32)` instead of `Box<Node>`: 4 bytes, O(1) equality, `Copy`
//! - `NodeRange`, `NameRange`, `BindingRange` for variable-length children
//!   (call actuals, closure formals, recursive binding groups)

use std::fmt;
use std::hash::{Hash, Hasher};

/// Index into an [`IrArena`](crate::IrArena).
#[derive(Copy, Clone, Eq, PartialEq)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Invalid node ID (sentinel value).
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// Create a new `NodeId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a valid ID.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl Hash for NodeId {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "NodeId({})", self.0)
        } else {
            write!(f, "NodeId::INVALID")
        }
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::INVALID
    }
}

macro_rules! define_range {
    ($(#[$doc:meta])* $name:ident, $what:literal) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            /// Empty range.
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            /// Create a new range.
            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                $name { start, len }
            }

            /// Check if the range is empty.
            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[doc = concat!("Number of ", $what, " in the range.")]
            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::EMPTY
            }
        }
    };
}

define_range!(
    /// Range of node IDs in the arena's flattened node lists (call actuals).
    NodeRange,
    "nodes"
);

define_range!(
    /// Range of names in the arena's flattened name lists (closure formals).
    NameRange,
    "names"
);

define_range!(
    /// Range of `(Name, NodeId)` pairs (recursive binding groups).
    BindingRange,
    "bindings"
);
