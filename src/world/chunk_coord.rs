use std::cmp::Ordering;

use glam::{IVec2, IVec3, Vec3};

use crate::world::chunk::{BLOCK_SCALE, CHUNK_WIDTH};

/// Grid position of a chunk column on the (x, z) plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkCoord(pub IVec2);

impl ChunkCoord {
    pub fn new(x: i32, z: i32) -> Self {
        Self(IVec2::new(x, z))
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn z(&self) -> i32 {
        self.0.y
    }

    /// Chunk owning a block position. Floor division, so block x = -1 lands
    /// in chunk -1, not chunk 0.
    pub fn containing_block(block: IVec3) -> Self {
        Self::new(
            block.x.div_euclid(CHUNK_WIDTH as i32),
            block.z.div_euclid(CHUNK_WIDTH as i32),
        )
    }

    /// Chunk under a world-space position (a viewpoint, typically).
    pub fn from_world(position: Vec3) -> Self {
        let block = (position / BLOCK_SCALE).floor().as_ivec3();
        Self::containing_block(block)
    }

    /// Block-grid origin of this chunk.
    pub fn block_origin(&self) -> IVec3 {
        IVec3::new(
            self.0.x * CHUNK_WIDTH as i32,
            0,
            self.0.y * CHUNK_WIDTH as i32,
        )
    }

    /// World-space origin of this chunk.
    pub fn world_origin(&self) -> Vec3 {
        self.block_origin().as_vec3() * BLOCK_SCALE
    }
}

impl PartialOrd for ChunkCoord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChunkCoord {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.0.x.cmp(&other.0.x) {
            Ordering::Equal => self.0.y.cmp(&other.0.y),
            ord => ord,
        }
    }
}

impl From<IVec2> for ChunkCoord {
    fn from(vec: IVec2) -> Self {
        Self(vec)
    }
}
