//! Game configuration loaded from TOML

use std::path::{Path, PathBuf};

use alphabeta_engine::{CachePolicy, EvalWeights, DEFAULT_DEPTH};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum plies per game before declaring a draw
pub const DEFAULT_MAX_PLIES: u32 = 400;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings for the game driver and the alpha-beta engine.
///
/// ```toml
/// depth = 7
/// max_plies = 200
/// cache_policy = "per_move"
///
/// [weights]
/// king = 250
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Search depth in plies
    pub depth: u8,
    pub max_plies: u32,
    pub cache_policy: CachePolicy,
    pub weights: EvalWeights,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            max_plies: DEFAULT_MAX_PLIES,
            cache_policy: CachePolicy::default(),
            weights: EvalWeights::default(),
        }
    }
}

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
