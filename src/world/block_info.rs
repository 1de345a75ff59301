use std::collections::HashMap;

use glam::Vec2;

use crate::world::block::{BlockFace, BlockType};

/// Per-face texture atlas offsets for a block, in pixels. Most blocks use
/// one tile on every face; grass-like blocks override the up/down faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaceOffsets {
    Uniform(Vec2),
    Sides { side: Vec2, up: Vec2, down: Vec2 },
}

impl FaceOffsets {
    pub fn pixel_offset(self, face: BlockFace) -> Vec2 {
        match self {
            FaceOffsets::Uniform(offset) => offset,
            FaceOffsets::Sides { side, up, down } => match face {
                BlockFace::Top => up,
                BlockFace::Bottom => down,
                _ => side,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockInfo {
    pub face_offsets: FaceOffsets,
    /// Seconds of sustained digging needed to break the block. Consumed by
    /// the gameplay layer, carried here with the rest of the metadata.
    pub time_to_break: f32,
}

/// Lookup service mapping block types to their metadata. A missing entry is
/// not an error; the mesher substitutes the missing-texture tile.
#[derive(Debug, Default)]
pub struct BlockDatabase {
    blocks: HashMap<BlockType, BlockInfo>,
}

impl BlockDatabase {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Database covering the stock terrain palette.
    pub fn standard() -> Self {
        let mut db = Self::empty();
        db.insert(
            BlockType::Stone,
            BlockInfo {
                face_offsets: FaceOffsets::Uniform(Vec2::new(16.0, 240.0)),
                time_to_break: 3.0,
            },
        );
        db.insert(
            BlockType::Dirt,
            BlockInfo {
                face_offsets: FaceOffsets::Uniform(Vec2::new(32.0, 240.0)),
                time_to_break: 0.75,
            },
        );
        db.insert(
            BlockType::Grass,
            BlockInfo {
                face_offsets: FaceOffsets::Sides {
                    side: Vec2::new(48.0, 240.0),
                    up: Vec2::new(0.0, 240.0),
                    down: Vec2::new(32.0, 240.0),
                },
                time_to_break: 0.9,
            },
        );
        db.insert(
            BlockType::Wood,
            BlockInfo {
                face_offsets: FaceOffsets::Sides {
                    side: Vec2::new(64.0, 224.0),
                    up: Vec2::new(80.0, 224.0),
                    down: Vec2::new(80.0, 224.0),
                },
                time_to_break: 2.0,
            },
        );
        db.insert(
            BlockType::Sand,
            BlockInfo {
                face_offsets: FaceOffsets::Uniform(Vec2::new(32.0, 224.0)),
                time_to_break: 0.75,
            },
        );
        db.insert(
            BlockType::Leaves,
            BlockInfo {
                face_offsets: FaceOffsets::Uniform(Vec2::new(80.0, 192.0)),
                time_to_break: 0.3,
            },
        );
        db
    }

    pub fn insert(&mut self, block: BlockType, info: BlockInfo) {
        self.blocks.insert(block, info);
    }

    pub fn get(&self, block: BlockType) -> Option<&BlockInfo> {
        self.blocks.get(&block)
    }
}
