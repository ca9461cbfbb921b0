//! # Configuration
//!
//! Wallflower configuration is loaded with [`confique`], layering environment
//! variables over a TOML file over compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `WALLFLOWER_STORAGE_KEY`, `WALLFLOWER_CATALOGUE_PATH`.
//! 2. **Config file**: `wallflower.toml` in the OS config directory (via `directories`).
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage_key` | `wf:search:filters` | Storage entry holding the filter state |
//! | `catalogue_path` | (built-in) | JSON file replacing the built-in catalogue |

use crate::catalogue::Catalogue;
use crate::error::{Result, WallflowerError};
use crate::session::DEFAULT_STORAGE_KEY;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "wallflower.toml";

/// Configuration for wallflower, stored in `wallflower.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WallflowerConfig {
    /// Storage entry that holds the persisted filter state.
    #[config(default = "wf:search:filters", env = "WALLFLOWER_STORAGE_KEY")]
    pub storage_key: String,

    /// JSON file with listings to search instead of the built-in catalogue.
    #[config(env = "WALLFLOWER_CATALOGUE_PATH")]
    pub catalogue_path: Option<PathBuf>,
}

impl Default for WallflowerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            catalogue_path: None,
        }
    }
}

impl WallflowerConfig {
    /// Loads from `<config_dir>/wallflower.toml` and the environment. A missing
    /// file is not an error.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let path = config_dir.as_ref().join(CONFIG_FILENAME);
        let config = WallflowerConfig::builder()
            .env()
            .file(&path)
            .load()
            .map_err(|e| WallflowerError::Config(e.to_string()))?;
        if config.storage_key.trim().is_empty() {
            return Err(WallflowerError::Config(
                "storage_key cannot be empty".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn catalogue(&self) -> Result<Catalogue> {
        match &self.catalogue_path {
            Some(path) => Catalogue::load(path),
            None => Ok(Catalogue::builtin()),
        }
    }

    /// A commented sample `wallflower.toml`.
    pub fn template() -> String {
        confique::toml::template::<WallflowerConfig>(confique::toml::FormatOptions::default())
    }
}
