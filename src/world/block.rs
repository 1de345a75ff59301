use glam::IVec3;

/// Block palette. `Air` is the zero value and doubles as the sentinel for
/// out-of-bounds and unloaded lookups.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockType {
    #[default]
    Air = 0,
    Stone,
    Dirt,
    Grass,
    Wood,
    Sand,
    Leaves,
}

impl BlockType {
    #[inline]
    pub fn is_air(self) -> bool {
        matches!(self, BlockType::Air)
    }

    #[inline]
    pub fn is_solid(self) -> bool {
        !self.is_air()
    }
}

/// The six axis-aligned cube faces, in the order the mesher visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFace {
    Right,
    Left,
    Front,
    Back,
    Top,
    Bottom,
}

impl BlockFace {
    pub const ALL: [BlockFace; 6] = [
        BlockFace::Right,
        BlockFace::Left,
        BlockFace::Front,
        BlockFace::Back,
        BlockFace::Top,
        BlockFace::Bottom,
    ];

    /// Unit offset to the neighboring cell this face borders.
    pub fn neighbor_offset(self) -> IVec3 {
        match self {
            BlockFace::Right => IVec3::X,
            BlockFace::Left => IVec3::NEG_X,
            BlockFace::Front => IVec3::Z,
            BlockFace::Back => IVec3::NEG_Z,
            BlockFace::Top => IVec3::Y,
            BlockFace::Bottom => IVec3::NEG_Y,
        }
    }
}
