use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/oslicense/config.toml`.
///
/// All fields are optional; the empty file is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OslConfig {
    /// License ID to fall back to when no argument is given and no manifest
    /// declares one. Historically some builds silently assumed "MIT"; here
    /// the fallback only applies when spelled out in the config file.
    #[serde(default)]
    pub default_license: Option<String>,
    /// Override for the registry API base URL (testing/mirrors).
    #[serde(default)]
    pub api_base: Option<String>,
    /// Override for the raw-text mirror base URL (testing/mirrors).
    #[serde(default)]
    pub text_base: Option<String>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("oslicense")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<OslConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = OslConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: OslConfig = toml::from_str(&data)?;
    Ok(cfg)
}
