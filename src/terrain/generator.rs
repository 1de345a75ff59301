use crate::config::{ConfigError, TerrainConfig};
use crate::terrain::noise_field::NoiseField;
use crate::world::block::BlockType;
use crate::world::chunk::{Chunk, BLOCK_SCALE, CHUNK_HEIGHT, CHUNK_WIDTH};
use crate::world::chunk_coord::ChunkCoord;

/// Thickness of the dirt capping below the surface, in world units.
const GRASS_LAYER_HEIGHT: f32 = 1.0;

/// Fills chunk block grids from the height field. Stateless after
/// construction and `Sync`, so whole chunks can be generated on worker
/// threads.
pub struct TerrainGenerator {
    field: NoiseField,
}

impl TerrainGenerator {
    pub fn new(config: &TerrainConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            field: NoiseField::new(config)?,
        })
    }

    pub fn height(&self, x: f32, z: f32) -> f32 {
        self.field.height(x, z)
    }

    /// Dense fill of one chunk: per column, cells strictly below the
    /// surface height are solid, capped by a dirt layer; everything at or
    /// above it stays air. Non-integer heights stair-step deterministically.
    pub fn generate(&self, coord: ChunkCoord) -> Chunk {
        let mut chunk = Chunk::new(coord);
        let origin = coord.world_origin();

        for x in 0..CHUNK_WIDTH {
            for z in 0..CHUNK_WIDTH {
                let height = self.field.height(
                    x as f32 * BLOCK_SCALE + origin.x,
                    z as f32 * BLOCK_SCALE + origin.z,
                );
                for y in 0..CHUNK_HEIGHT {
                    let cell = y as f32 * BLOCK_SCALE;
                    if cell >= height {
                        break;
                    }
                    let block = if height - cell <= GRASS_LAYER_HEIGHT {
                        BlockType::Dirt
                    } else {
                        BlockType::Stone
                    };
                    chunk.set(x, y, z, block);
                }
            }
        }
        chunk
    }
}
