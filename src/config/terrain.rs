use serde::{Deserialize, Serialize};

/// Noise generator kinds available to octaves and the domain warp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoiseKind {
    Perlin,
    OpenSimplex,
    SuperSimplex,
    Value,
}

/// One weighted noise layer: (kind, frequency, amplitude). Immutable after
/// construction; the ordered octave list plus the warp settings fully
/// determine the height field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseOctaveConfig {
    pub kind: NoiseKind,
    pub frequency: f32,
    pub amplitude: f32,
}

impl Default for NoiseOctaveConfig {
    fn default() -> Self {
        Self {
            kind: NoiseKind::OpenSimplex,
            frequency: 0.2,
            amplitude: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub seed: u32,
    pub base_height: f32,
    pub octaves: Vec<NoiseOctaveConfig>,
    pub domain_warp: NoiseOctaveConfig,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 1337,
            base_height: 24.0,
            octaves: vec![
                NoiseOctaveConfig {
                    kind: NoiseKind::OpenSimplex,
                    frequency: 0.015,
                    amplitude: 30.0,
                },
                NoiseOctaveConfig {
                    kind: NoiseKind::Perlin,
                    frequency: 0.08,
                    amplitude: 6.0,
                },
            ],
            domain_warp: NoiseOctaveConfig {
                kind: NoiseKind::OpenSimplex,
                frequency: 0.01,
                amplitude: 25.0,
            },
        }
    }
}

impl TerrainConfig {
    /// Perfectly flat terrain at `base_height`: no octaves, zero warp
    /// displacement. Useful for tests and sanity runs.
    pub fn flat(base_height: f32) -> Self {
        Self {
            seed: 0,
            base_height,
            octaves: Vec::new(),
            domain_warp: NoiseOctaveConfig {
                amplitude: 0.0,
                ..NoiseOctaveConfig::default()
            },
        }
    }
}
