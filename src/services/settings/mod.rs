//! Configuration file persistence.
//!
//! The calendar configuration lives in a TOML file. A missing file yields the
//! defaults; a present but malformed or out-of-range file is an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::CalendarConfig;

const CONFIG_FILE: &str = "config.toml";

/// `<config dir>/month-grid/config.toml` for the current user.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "MonthGrid", "month-grid")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

pub fn load_config(path: &Path) -> Result<CalendarConfig> {
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(CalendarConfig::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config from {}", path.display()))?;
    let config: CalendarConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config from {}", path.display()))?;
    config
        .validate()
        .map_err(|e| anyhow!("invalid config in {}: {}", path.display(), e))?;

    log::info!("loaded config from {}", path.display());
    Ok(config)
}

pub fn save_config(path: &Path, config: &CalendarConfig) -> Result<()> {
    config.validate().map_err(|e| anyhow!("invalid config: {}", e))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = toml::to_string_pretty(config).context("failed to serialize config")?;
    fs::write(path, data)
        .with_context(|| format!("failed to write config to {}", path.display()))?;
    Ok(())
}
