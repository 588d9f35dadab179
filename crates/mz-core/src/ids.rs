//! Node and entity handles.
//!
//! A maze is stored as flat arenas: graph nodes in one `Vec`, per-actor state
//! in parallel `Vec`s on the host.  Both handle types are plain `u32` slots
//! into those arenas.  `u32::MAX` is reserved as a "not set" marker.

use std::fmt;

macro_rules! arena_id {
    ($(#[$attr:meta])* $name:ident, $tag:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            pub const INVALID: $name = $name(u32::MAX);

            /// Arena slot.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        // Unset handles start out as INVALID, never as slot 0.
        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::INVALID
            }
        }

        /// `node#4`, `entity#0`; `node#-` for the marker.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, concat!($tag, "#{}"), self.0)
                } else {
                    f.write_str(concat!($tag, "#-"))
                }
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;

            fn try_from(slot: usize) -> Result<Self, Self::Error> {
                u32::try_from(slot).map($name)
            }
        }
    };
}

arena_id! {
    /// A junction or corner of the maze graph.
    NodeId, "node"
}

arena_id! {
    /// A player or ghost, numbered in the order it was added to the host.
    EntityId, "entity"
}
