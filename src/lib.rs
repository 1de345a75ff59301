pub mod config;
pub mod mesh;
pub mod terrain;
pub mod world;

// Re-export commonly used types
pub use config::{ConfigError, EngineConfig, StreamingConfig, TerrainConfig};
pub use mesh::{ChunkMesh, MeshBuilder};
pub use terrain::{ChunkLoader, NoiseField, TerrainGenerator};
pub use world::{
    apply_edit, BlockDatabase, BlockType, Chunk, ChunkCoord, EditKind, World, WorldError,
};
