pub mod block;
pub mod block_info;
pub mod chunk;
pub mod chunk_coord;
pub mod core;
pub mod edit;

// Re-export commonly used types
pub use block::{BlockFace, BlockType};
pub use block_info::{BlockDatabase, BlockInfo, FaceOffsets};
pub use chunk::{Chunk, BLOCK_SCALE, CHUNK_HEIGHT, CHUNK_VOLUME, CHUNK_WIDTH};
pub use chunk_coord::ChunkCoord;
pub use core::{World, WorldError};
pub use edit::{apply_edit, EditKind};
