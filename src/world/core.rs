use std::collections::HashMap;

use glam::IVec3;
use thiserror::Error;

use crate::world::block::BlockType;
use crate::world::chunk::{Chunk, CHUNK_HEIGHT, CHUNK_WIDTH};
use crate::world::chunk_coord::ChunkCoord;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("chunk already loaded at {0:?}")]
    ChunkAlreadyLoaded(ChunkCoord),
}

/// The authoritative chunk map. A coordinate is present iff that chunk has
/// been loaded; chunks are mutated in place and never replaced.
#[derive(Default)]
pub struct World {
    chunks: HashMap<ChunkCoord, Chunk>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    pub fn get_mut(&mut self, coord: ChunkCoord) -> Option<&mut Chunk> {
        self.chunks.get_mut(&coord)
    }

    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.chunks.keys().copied()
    }

    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    /// Insert a freshly generated chunk. Loading the same coordinate twice
    /// is a programming error on the caller's side.
    pub fn insert(&mut self, chunk: Chunk) -> Result<(), WorldError> {
        let coord = chunk.coord();
        if self.chunks.contains_key(&coord) {
            return Err(WorldError::ChunkAlreadyLoaded(coord));
        }
        self.chunks.insert(coord, chunk);
        Ok(())
    }

    /// Resolve a possibly out-of-range local position against `chunk`,
    /// crossing into the adjacent chunk when x or z overflows. Vertical
    /// out-of-range and unloaded neighbors read as `Air`, so the mesher
    /// never has to special-case world edges or the load frontier.
    pub fn resolve_block(&self, chunk: &Chunk, local: IVec3) -> BlockType {
        if Chunk::in_bounds(local) {
            return chunk.get_local(local);
        }
        if local.y < 0 || local.y >= CHUNK_HEIGHT as i32 {
            return BlockType::Air;
        }

        // Reduce axis by axis, x first then z. Overflow is at most one
        // chunk; only one level of neighbor indirection is defined.
        let width = CHUNK_WIDTH as i32;
        let mut coord = chunk.coord();
        let mut local = local;
        if local.x < 0 {
            coord.0.x -= 1;
            local.x += width;
        } else if local.x >= width {
            coord.0.x += 1;
            local.x -= width;
        }
        if local.z < 0 {
            coord.0.y -= 1;
            local.z += width;
        } else if local.z >= width {
            coord.0.y += 1;
            local.z -= width;
        }

        match self.get(coord) {
            Some(neighbor) => neighbor.get_local(local),
            None => BlockType::Air,
        }
    }

    /// Block value at an absolute block position, `Air` when the owning
    /// chunk is not loaded or the position is out of the vertical range.
    pub fn block_at(&self, block: IVec3) -> BlockType {
        if block.y < 0 || block.y >= CHUNK_HEIGHT as i32 {
            return BlockType::Air;
        }
        let coord = ChunkCoord::containing_block(block);
        match self.get(coord) {
            Some(chunk) => chunk.get_local(block - coord.block_origin()),
            None => BlockType::Air,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_chunk(coord: ChunkCoord) -> World {
        let mut world = World::new();
        world.insert(Chunk::new(coord)).unwrap();
        world
    }

    #[test]
    fn duplicate_insert_is_an_error() {
        let mut world = world_with_chunk(ChunkCoord::new(0, 0));
        assert!(matches!(
            world.insert(Chunk::new(ChunkCoord::new(0, 0))),
            Err(WorldError::ChunkAlreadyLoaded(_))
        ));
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn vertical_out_of_range_is_air() {
        let mut world = world_with_chunk(ChunkCoord::new(0, 0));
        // Fill the full column so the result cannot come from the grid.
        for y in 0..CHUNK_HEIGHT {
            world
                .get_mut(ChunkCoord::new(0, 0))
                .unwrap()
                .set(4, y, 4, BlockType::Stone);
        }
        let chunk = world.get(ChunkCoord::new(0, 0)).unwrap();
        assert_eq!(world.resolve_block(chunk, IVec3::new(4, -1, 4)), BlockType::Air);
        assert_eq!(
            world.resolve_block(chunk, IVec3::new(4, CHUNK_HEIGHT as i32, 4)),
            BlockType::Air
        );
    }

    #[test]
    fn unloaded_neighbor_is_air() {
        let world = world_with_chunk(ChunkCoord::new(0, 0));
        let chunk = world.get(ChunkCoord::new(0, 0)).unwrap();
        assert_eq!(world.resolve_block(chunk, IVec3::new(-1, 10, 5)), BlockType::Air);
        assert_eq!(world.resolve_block(chunk, IVec3::new(16, 10, 5)), BlockType::Air);
        assert_eq!(world.resolve_block(chunk, IVec3::new(5, 10, -1)), BlockType::Air);
        assert_eq!(world.resolve_block(chunk, IVec3::new(5, 10, 16)), BlockType::Air);
    }

    #[test]
    fn overflow_wraps_into_loaded_neighbors() {
        let mut world = world_with_chunk(ChunkCoord::new(0, 0));

        let mut west = Chunk::new(ChunkCoord::new(-1, 0));
        west.set(CHUNK_WIDTH - 1, 10, 5, BlockType::Stone);
        world.insert(west).unwrap();

        let mut east = Chunk::new(ChunkCoord::new(1, 0));
        east.set(0, 10, 5, BlockType::Dirt);
        world.insert(east).unwrap();

        let mut north = Chunk::new(ChunkCoord::new(0, 1));
        north.set(5, 10, 0, BlockType::Wood);
        world.insert(north).unwrap();

        let chunk = world.get(ChunkCoord::new(0, 0)).unwrap();
        assert_eq!(
            world.resolve_block(chunk, IVec3::new(-1, 10, 5)),
            BlockType::Stone
        );
        assert_eq!(
            world.resolve_block(chunk, IVec3::new(CHUNK_WIDTH as i32, 10, 5)),
            BlockType::Dirt
        );
        assert_eq!(
            world.resolve_block(chunk, IVec3::new(5, 10, CHUNK_WIDTH as i32)),
            BlockType::Wood
        );
    }

    #[test]
    fn corner_overflow_resolves_the_diagonal_chunk() {
        let mut world = world_with_chunk(ChunkCoord::new(0, 0));
        let mut diagonal = Chunk::new(ChunkCoord::new(-1, -1));
        diagonal.set(CHUNK_WIDTH - 1, 10, CHUNK_WIDTH - 1, BlockType::Sand);
        world.insert(diagonal).unwrap();

        let chunk = world.get(ChunkCoord::new(0, 0)).unwrap();
        assert_eq!(
            world.resolve_block(chunk, IVec3::new(-1, 10, -1)),
            BlockType::Sand
        );
    }

    #[test]
    fn block_at_uses_floor_division() {
        let mut world = World::new();
        let mut chunk = Chunk::new(ChunkCoord::new(-1, 0));
        chunk.set(CHUNK_WIDTH - 1, 10, 0, BlockType::Stone);
        world.insert(chunk).unwrap();

        assert_eq!(world.block_at(IVec3::new(-1, 10, 0)), BlockType::Stone);
        assert_eq!(world.block_at(IVec3::new(-2, 10, 0)), BlockType::Air);
        assert_eq!(world.block_at(IVec3::new(0, 10, 0)), BlockType::Air);
    }
}
