use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{DB_NAME, MIN_ENTRIES};

const APP_DIR: &str = "swatchlist";
const DEFAULT_LOG_LEVEL: &str = "info";

/// On-disk configuration; every key is optional
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SwatchlistConfig {
    pub data_dir: Option<PathBuf>,
    pub db_name: Option<String>,
    pub min_entries: Option<usize>,
    pub log_level: Option<String>,
}

/// Configuration with defaults filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub db_name: String,
    pub min_entries: usize,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&SwatchlistConfig::default())
    }
}

impl Settings {
    pub fn from_config(config: &SwatchlistConfig) -> Self {
        Self {
            data_dir: config.data_dir.clone().unwrap_or_else(default_data_dir),
            db_name: config.db_name.clone().unwrap_or_else(|| DB_NAME.to_string()),
            min_entries: config.min_entries.unwrap_or(MIN_ENTRIES),
            log_level: config
                .log_level
                .clone()
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    pub fn with_db_name(mut self, db_name: Option<String>) -> Self {
        if let Some(name) = db_name {
            self.db_name = name;
        }
        self
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("swatchlist.toml")
}

/// Platform app-data directory, e.g. `~/.local/share/swatchlist`
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<SwatchlistConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: SwatchlistConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &SwatchlistConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}
