//! Settings storage
//!
//! Manages persistence of user preferences.

use crate::storage::{get_data_dir, StorageError};
use crate::types::profile::ProfileId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Backend base URL, overridden by `BABBAGEBOX_API_BASE_URL`
    #[serde(default)]
    pub api_base_url: Option<String>,
    /// UI theme: "dark" or "light"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Id of the last selected chat profile
    #[serde(default = "default_profile")]
    pub profile: String,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_profile() -> String {
    ProfileId::default().as_str().to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: None,
            theme: default_theme(),
            profile: default_profile(),
        }
    }
}

impl AppSettings {
    /// Validate settings values
    pub fn validate(&mut self) {
        if self
            .api_base_url
            .as_deref()
            .is_some_and(|url| url.trim().is_empty())
        {
            self.api_base_url = None;
        }

        if self.theme != "dark" && self.theme != "light" {
            self.theme = default_theme();
        }

        if ProfileId::parse(&self.profile).is_none() {
            tracing::warn!("Unknown profile '{}', using default", self.profile);
            self.profile = default_profile();
        }
    }

    /// Profile to start with
    pub fn profile_id(&self) -> ProfileId {
        ProfileId::parse(&self.profile).unwrap_or_default()
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    match get_settings_path().and_then(|path| load_settings_from(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

fn load_settings_from(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from disk");
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<(), StorageError> {
    save_settings_to(settings, &get_settings_path()?)
}

fn save_settings_to(settings: &AppSettings, path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to disk");
    Ok(())
}
