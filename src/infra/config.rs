use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;
use tracing::{info, warn};

use crate::infra::api::normalize_base_url;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "OrbitLogistics";
const APP_NAME: &str = "OrbitDashboard";
const CONFIG_FILENAME: &str = "config.json";

/// Environment variable that overrides the configured API base URL.
pub const API_URL_ENV: &str = "ORBIT_API_URL";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_TILE_URL: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub tile_url: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            tile_url: DEFAULT_TILE_URL.to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Applies the environment override, then falls back to the default base
    /// URL if the result is not a valid URL.
    pub fn resolve(mut self, env_override: Option<String>) -> Self {
        if let Some(url) = env_override.filter(|value| !value.trim().is_empty()) {
            self.api_base_url = url;
        }
        if let Err(err) = normalize_base_url(&self.api_base_url) {
            warn!(
                url = %self.api_base_url,
                "ignoring invalid API base URL ({err}); using {DEFAULT_API_BASE_URL}"
            );
            self.api_base_url = DEFAULT_API_BASE_URL.to_string();
        }
        self
    }
}

fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

fn read_config_file() -> Result<Option<DashboardConfig>, ConfigError> {
    let Some(path) = config_file() else {
        return Ok(None);
    };
    match fs::read_to_string(&path) {
        Ok(raw) => DashboardConfig::from_json(&raw).map(Some),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Defaults, then `config.json` from the platform config directory, then the
/// `ORBIT_API_URL` environment variable.
pub fn load_config() -> DashboardConfig {
    let from_file = match read_config_file() {
        Ok(config) => config,
        Err(err) => {
            warn!("Failed to read dashboard config, using defaults: {err}");
            None
        }
    };
    let config = from_file
        .unwrap_or_default()
        .resolve(std::env::var(API_URL_ENV).ok());
    info!(api = %config.api_base_url, "dashboard configuration loaded");
    config
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
