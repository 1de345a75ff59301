use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamingConfig {
    /// Square (Chebyshev) radius, in chunks, kept loaded around the
    /// viewpoint's chunk.
    pub view_radius: i32,
    /// Chunk loads worked off per tick. `None` drains a whole sweep
    /// eagerly in one tick.
    pub loads_per_tick: Option<usize>,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            view_radius: 5,
            loads_per_tick: Some(1),
        }
    }
}
