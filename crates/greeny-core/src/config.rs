//! Optional user configuration.
//!
//! A small TOML file can pin where durable storage lives. Resolution
//! precedence (highest wins): explicit override (CLI flag), the
//! `GREENY_DATA_DIR` environment variable, the config file, then the
//! platform data directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "GREENY_DATA_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    /// Root directory for the file-backed store.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Load `<config_dir>/greeny/config.toml`. A missing file (or missing
/// platform config dir) yields defaults; a present-but-unparseable file is
/// a real error the user should see.
pub fn load_user_config() -> Result<UserConfig> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(UserConfig::default());
    };
    load_config_file(&config_dir.join("greeny/config.toml"))
}

pub fn load_config_file(path: &Path) -> Result<UserConfig> {
    if !path.exists() {
        return Ok(UserConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str::<UserConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Resolve the storage root from all sources.
#[must_use]
pub fn resolve_data_dir(
    flag: Option<PathBuf>,
    env_value: Option<PathBuf>,
    config: &UserConfig,
) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Some(dir) = env_value {
        return dir;
    }
    if let Some(dir) = &config.data_dir {
        return dir.clone();
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("greeny")
}
