//! # Context Setup
//!
//! [`initialize`] resolves where wallflower keeps its files, loads the
//! configuration, and opens a [`SearchApi`] at the requested location.
//!
//! ## Directory Resolution
//!
//! Data directory (holds the persisted filter entry):
//! 1. `data_override` argument (the CLI's `--data`)
//! 2. `WALLFLOWER_DATA` environment variable
//! 3. OS data directory via `directories::ProjectDirs`
//!
//! Config directory (holds `wallflower.toml`):
//! 1. `WALLFLOWER_CONFIG_DIR` environment variable
//! 2. OS config directory via `directories::ProjectDirs`

use crate::api::SearchApi;
use crate::config::WallflowerConfig;
use crate::error::{Result, WallflowerError};
use crate::navigation::MemoryHistory;
use crate::store::FsBackend;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

pub const DATA_ENV: &str = "WALLFLOWER_DATA";
pub const CONFIG_DIR_ENV: &str = "WALLFLOWER_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallflowerPaths {
    pub data: PathBuf,
    pub config: PathBuf,
}

pub struct WallflowerContext {
    pub api: SearchApi<FsBackend, MemoryHistory>,
    pub config: WallflowerConfig,
    pub paths: WallflowerPaths,
}

pub fn resolve_paths(data_override: Option<PathBuf>) -> Result<WallflowerPaths> {
    let env_path = |name: &str| std::env::var_os(name).map(PathBuf::from);
    let project_dirs = || {
        ProjectDirs::from("com", "wallflower", "wallflower").ok_or_else(|| {
            WallflowerError::Config("Could not determine a home directory".to_string())
        })
    };

    let data = match data_override.or_else(|| env_path(DATA_ENV)) {
        Some(path) => path,
        None => project_dirs()?.data_dir().to_path_buf(),
    };
    let config = match env_path(CONFIG_DIR_ENV) {
        Some(path) => path,
        None => project_dirs()?.config_dir().to_path_buf(),
    };

    Ok(WallflowerPaths { data, config })
}

/// Builds the context for one page visit at `location`.
pub fn initialize(location: &str, data_override: Option<PathBuf>) -> Result<WallflowerContext> {
    initialize_with(location, resolve_paths(data_override)?)
}

pub fn initialize_with(location: &str, paths: WallflowerPaths) -> Result<WallflowerContext> {
    debug!(data = %paths.data.display(), config = %paths.config.display(), "resolved paths");

    let config = WallflowerConfig::load(&paths.config)?;
    let catalogue = config.catalogue()?;
    let store = FsBackend::new(paths.data.clone());
    let api = SearchApi::open(
        catalogue,
        store,
        MemoryHistory::new(location),
        &config.storage_key,
    );

    Ok(WallflowerContext { api, config, paths })
}
