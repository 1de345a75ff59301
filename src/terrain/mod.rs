//! Terrain generation and chunk streaming.
pub mod generator;
pub mod loader;
pub mod noise_field;

pub use generator::TerrainGenerator;
pub use loader::ChunkLoader;
pub use noise_field::NoiseField;
