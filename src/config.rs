use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::infra::http::client::DEFAULT_API_BASE_URL;
use crate::ui::format::DisplayLocale;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    #[default]
    Live,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub data_mode: DataMode,
    pub per_page: Option<u32>,
    pub request_timeout_secs: u64,
    pub locale: DisplayLocale,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            data_mode: DataMode::Live,
            per_page: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            locale: DisplayLocale::EnUs,
        }
    }
}

impl AppConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

pub fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "covid-dashboard", "covid-dashboard")
        .ok_or_else(|| anyhow!("unable to resolve project directories"))
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.yml"))
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    serde_yaml::from_str::<AppConfig>(contents).context("failed to parse config")
}

pub fn load_config(path: &Path, allow_missing: bool) -> Result<AppConfig> {
    match std::fs::read_to_string(path) {
        Ok(contents) if contents.trim().is_empty() => Ok(AppConfig::default()),
        Ok(contents) => {
            parse_config(&contents).with_context(|| format!("in {}", path.display()))
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && allow_missing => {
            Ok(AppConfig::default())
        }
        Err(err) => {
            Err(err).with_context(|| format!("failed to read config: {}", path.display()))
        }
    }
}

/// Reads `config.yml` from the platform config directory, falling back to
/// defaults when it is absent or unreadable.
pub fn load_or_default() -> AppConfig {
    let loaded = default_config_path().and_then(|path| {
        let config = load_config(&path, true)?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    });
    match loaded {
        Ok(config) => config,
        Err(err) => {
            warn!("using default configuration: {err:#}");
            AppConfig::default()
        }
    }
}
