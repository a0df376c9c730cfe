use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Location of the document manifest JSON
    pub manifest: PathBuf,
    /// Name column truncation budget, leading characters
    pub name_front_chars: usize,
    /// Name column truncation budget, trailing characters
    pub name_back_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            manifest: PathBuf::from("documents.json"),
            name_front_chars: 24,
            name_back_chars: 10,
        }
    }
}

impl AppConfig {
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("docview").join("config.yaml"))
    }

    /// Load an explicitly requested config file. Missing files are an error.
    pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Self::read(path)
    }

    /// Load the config at the default location, falling back to built-in
    /// defaults when no file has been written yet.
    pub fn load_or_default(path: &Path) -> Result<AppConfig, ConfigError> {
        if !path.exists() {
            info!("no config at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }
        Self::read(path)
    }

    fn read(path: &Path) -> Result<AppConfig, ConfigError> {
        let raw = fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
        let config: AppConfig =
            serde_yaml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }
}
