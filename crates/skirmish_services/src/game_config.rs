//! Game configuration tree
//!
//! Read-only data shipped with the game. The preferences dialog only cares
//! about the `advanced_preference` entries: toggles the game data declares
//! without the engine knowing about them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameConfigError {
    #[error("failed to read game config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid game config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A yes/no preference declared by game data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedPreference {
    /// Label shown to the player
    pub name: String,
    /// Preference key the toggle writes
    pub field: String,
    /// Value used while the key is unset
    #[serde(default)]
    pub default: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default, rename = "advanced_preference")]
    pub advanced_preferences: Vec<AdvancedPreference>,
}

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| GameConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| GameConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let cfg: Self = serde_json::from_str(text)?;
        tracing::debug!(
            "Game config declares {} advanced preferences",
            cfg.advanced_preferences.len()
        );
        Ok(cfg)
    }

    pub fn advanced_preference(&self, index: usize) -> Option<&AdvancedPreference> {
        self.advanced_preferences.get(index)
    }
}
