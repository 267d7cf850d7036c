use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::declaration::ValueFormat;

/// Global configuration loaded from `~/.config/modelsum/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsumConfig {
    /// How checksum parameter values are written: "bare" (default) or "sum-line".
    pub value_format: ValueFormat,
    /// Algorithm used by `modelsum hash` when none is given.
    pub default_algorithm: String,
    /// Manifest file looked up in the repository root when none is given.
    pub manifest_name: String,
}

impl Default for ModelsumConfig {
    fn default() -> Self {
        Self {
            value_format: ValueFormat::Bare,
            default_algorithm: "md5".to_string(),
            manifest_name: "checksums.toml".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("modelsum")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ModelsumConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<ModelsumConfig> {
    if !path.exists() {
        let default_cfg = ModelsumConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ModelsumConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
