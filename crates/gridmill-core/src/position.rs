//! The [`BlockPos`] spatial key.

use std::fmt;

use crate::id::WorldId;

/// Immutable spatial key identifying one registry slot.
///
/// A position is the complete key: a [`WorldId`] plus integer `(x, y, z)`
/// coordinates. Equality and hashing cover exactly these four fields —
/// there are no hidden components, and positions in different worlds are
/// always distinct. Values are `Copy` and never mutated after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockPos {
    /// The world this position belongs to.
    pub world: WorldId,
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl BlockPos {
    /// Create a position from a world and integer coordinates.
    pub fn new(world: WorldId, x: i32, y: i32, z: i32) -> Self {
        Self { world, x, y, z }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{},{},{}", self.world, self.x, self.y, self.z)
    }
}
