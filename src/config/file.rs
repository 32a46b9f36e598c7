//! JSON settings file
//!
//! Read-only loader that turns the on-disk settings file into a
//! [`SettingsStore`]. Nothing is ever written back.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::settings::EmulationSettings;
use super::store::SettingsStore;

/// On-disk layout of the settings file
#[derive(Debug, Deserialize)]
pub struct SettingsFile {
    #[serde(default = "EmulationSettings::global")]
    pub global: EmulationSettings,
    #[serde(default)]
    pub profiles: Vec<EmulationSettings>,
}

impl SettingsFile {
    /// Default settings file location
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        path
    }

    /// Parse settings file contents
    /// Every profile entry must carry a non-empty name.
    pub fn parse(contents: &str) -> Result<Self> {
        let file: Self =
            serde_json::from_str(contents).context("Failed to parse settings JSON")?;

        for (index, profile) in file.profiles.iter().enumerate() {
            if profile.name.trim().is_empty() {
                bail!("Profile entry {} has no name", index);
            }
        }

        Ok(file)
    }

    /// Load the settings file at `path` into a store.
    /// A missing file yields default global settings and no profiles.
    pub fn load(path: &Path) -> Result<SettingsStore> {
        if !path.exists() {
            warn!(path = %path.display(), "Settings file not found, using default global settings");
            return Ok(SettingsStore::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;

        let file = Self::parse(&contents)
            .with_context(|| format!("Invalid settings file {:?}", path))?;

        info!(path = %path.display(), profiles = file.profiles.len(), "Loaded settings");
        Ok(file.into_store())
    }

    pub fn into_store(self) -> SettingsStore {
        self.profiles
            .into_iter()
            .fold(SettingsStore::new(self.global), SettingsStore::with_profile)
    }
}
