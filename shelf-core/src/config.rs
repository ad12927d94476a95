//! Front-end configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Genres offered by the selector when no configuration is given
pub const DEFAULT_GENRES: &[&str] = &["Fantasía", "Ciencia ficción", "Terror", "Zombies"];

/// Configuration loaded from a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShelfConfig {
    /// Genres listed first in the selector
    pub genres: Vec<String>,

    /// Catalog document to load instead of the bundled one
    pub catalog: Option<PathBuf>,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            genres: DEFAULT_GENRES.iter().map(|g| g.to_string()).collect(),
            catalog: None,
        }
    }
}

impl ShelfConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&data)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }
}
