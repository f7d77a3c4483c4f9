//! Node and agent handles.
//!
//! A `NodeId` is a position in the graph's node list and an `AgentId` is a
//! position in the simulation's agent list.  Neither converts into the
//! other.  Neighbour lists are sorted by `NodeId`, so both derive `Ord`.

use std::fmt;

/// Declare a `u32` handle type with index conversions.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Placeholder for a handle that was never assigned.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Position in the owning list.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Handle for the entry at `i`.  Debug builds assert that `i`
            /// fits below `INVALID`.
            #[inline(always)]
            pub fn from_index(i: usize) -> Self {
                debug_assert!(i < <$inner>::MAX as usize);
                $name(i as $inner)
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an agent in the simulation's agent list.  Also the update
    /// order within a tick.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a node in the movement graph.
    pub struct NodeId(u32);
}
