use glam::IVec3;

use crate::mesh::ChunkMesh;
use crate::world::block::BlockType;
use crate::world::chunk_coord::ChunkCoord;

pub const CHUNK_WIDTH: usize = 16;
pub const CHUNK_HEIGHT: usize = 128;
pub const CHUNK_VOLUME: usize = CHUNK_WIDTH * CHUNK_HEIGHT * CHUNK_WIDTH;

/// World units per block cell. Kept at 1.0 so cell indices and world units
/// agree; every place that mixes the two still goes through this constant.
pub const BLOCK_SCALE: f32 = 1.0;

/// One fixed-size column of the voxel grid: a dense block array plus the
/// most recently built mesh for it. Grid dimensions never change after
/// creation; only cell values are mutated.
#[derive(Debug, Clone)]
pub struct Chunk {
    coord: ChunkCoord,
    blocks: Vec<BlockType>,
    pub mesh: Option<ChunkMesh>,
}

impl Chunk {
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            blocks: vec![BlockType::Air; CHUNK_VOLUME],
            mesh: None,
        }
    }

    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    // Flat layout: x varies fastest, then z, then y.
    #[inline]
    fn index(x: usize, y: usize, z: usize) -> usize {
        x + z * CHUNK_WIDTH + y * CHUNK_WIDTH * CHUNK_WIDTH
    }

    pub fn in_bounds(local: IVec3) -> bool {
        local.x >= 0
            && local.x < CHUNK_WIDTH as i32
            && local.y >= 0
            && local.y < CHUNK_HEIGHT as i32
            && local.z >= 0
            && local.z < CHUNK_WIDTH as i32
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> BlockType {
        self.blocks[Self::index(x, y, z)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, block: BlockType) {
        self.blocks[Self::index(x, y, z)] = block;
    }

    pub fn get_local(&self, local: IVec3) -> BlockType {
        debug_assert!(Self::in_bounds(local));
        self.get(local.x as usize, local.y as usize, local.z as usize)
    }

    pub fn set_local(&mut self, local: IVec3, block: BlockType) {
        debug_assert!(Self::in_bounds(local));
        self.set(local.x as usize, local.y as usize, local.z as usize, block);
    }
}
