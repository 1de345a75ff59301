pub mod streaming;
pub mod terrain;

pub use streaming::StreamingConfig;
pub use terrain::{NoiseKind, NoiseOctaveConfig, TerrainConfig};

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("noise frequency must be positive and finite, got {0}")]
    InvalidFrequency(f32),
    #[error("noise amplitude must be finite, got {0}")]
    InvalidAmplitude(f32),
    #[error("base height must be finite, got {0}")]
    InvalidBaseHeight(f32),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub terrain: TerrainConfig,
    pub streaming: StreamingConfig,
}

impl EngineConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
