// Wrapper types making it harder to accidentaly use the wrong underlying type.

use serde::{Deserialize, Serialize};

use crate::math::{vector2::Vector2, vector3::Vector3};

/// A raw block state id. The registry owned by the host maps this id to a
/// block and its current properties. Id 0 is always the air state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockStateId(pub u16);

impl BlockStateId {
    /// The air block state.
    pub const AIR: Self = Self(0);

    /// Whether this id is the air state.
    #[must_use]
    pub const fn is_air(self) -> bool {
        self.0 == 0
    }
}

/// A chunk position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkPos(pub Vector2<i32>);

impl ChunkPos {
    /// Returns the chunk column containing the given block position.
    #[must_use]
    pub const fn containing(pos: BlockPos) -> Self {
        Self(Vector2::new(pos.0.x >> 4, pos.0.z >> 4))
    }
}

/// A block position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    /// Creates a position from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// Returns this position moved by the given deltas.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.0.x + dx, self.0.y + dy, self.0.z + dz)
    }

    /// Returns this position with its Y component replaced.
    #[must_use]
    pub const fn with_y(self, y: i32) -> Self {
        Self::new(self.0.x, y, self.0.z)
    }
}
