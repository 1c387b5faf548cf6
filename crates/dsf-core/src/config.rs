use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/dsf/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DsfConfig {
    /// Directory that receives one subdirectory per dataset.
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
    /// Override for the download cache location (default: XDG cache dir).
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
    /// Base URL of the dataset API.
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_output_root() -> PathBuf {
    PathBuf::from("data/datasets")
}

fn default_api_base() -> String {
    "https://www.kaggle.com/api/v1".to_string()
}

impl Default for DsfConfig {
    fn default() -> Self {
        Self {
            output_root: default_output_root(),
            cache_dir: None,
            api_base: default_api_base(),
        }
    }
}

impl DsfConfig {
    /// Cache directory for downloaded archives: the configured override, or
    /// `~/.cache/dsf` when none is set.
    pub fn resolve_cache_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.cache_dir {
            return Ok(dir.clone());
        }
        let xdg_dirs = xdg::BaseDirectories::with_prefix("dsf")?;
        Ok(xdg_dirs.get_cache_home())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dsf")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DsfConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DsfConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DsfConfig = toml::from_str(&data)?;
    Ok(cfg)
}
