use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use airhr_core::config::UiSettings;
use airhr_core::store::CosmosDbStatus;
use serde::Deserialize;

use crate::error::CliError;

pub const DEFAULT_SHARE_URL: &str = "http://localhost:5173/";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    pub shell: ShellSettings,
    pub store: StoreSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ShellSettings {
    pub share_url: String,
    pub cell_width_px: u16,
    pub log_level: Option<String>,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            share_url: DEFAULT_SHARE_URL.to_string(),
            cell_width_px: 8,
            log_level: None,
        }
    }
}

impl ShellSettings {
    pub fn cell_width_px(&self) -> u16 {
        self.cell_width_px.max(1)
    }
}

/// Seed values for the in-process application store.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StoreSettings {
    pub cosmos_db_status: CosmosDbStatus,
    pub load_delay_ms: u64,
    pub chat_history_open: bool,
    pub ui: UiSettings,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            cosmos_db_status: CosmosDbStatus::NotConfigured,
            load_delay_ms: 300,
            chat_history_open: false,
            ui: UiSettings::default(),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("airhr").join("config.toml"))
}

/// An explicit path must exist; the default path may be missing.
pub fn load(explicit: Option<&Path>) -> Result<CliConfig, CliError> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => match default_config_path() {
            Some(path) => (path, false),
            None => return Ok(CliConfig::default()),
        },
    };

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound && !required => {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(CliConfig::default());
        }
        Err(err) => return Err(err.into()),
    };

    toml::from_str(&text).map_err(|source| CliError::Config { path, source })
}
