use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use log::info;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::generator::RngBackend;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// rng_backend = "java"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Optional RNG backend name, e.g. "java" or "std".
    pub rng_backend: Option<String>,
}

impl Config {
    /// Configured backend, or the default one when none is set.
    pub fn rng_backend(&self) -> Result<RngBackend> {
        match self.rng_backend.as_deref() {
            Some(name) => RngBackend::try_from(name).map_err(|err| {
                anyhow!("{err}\nHint: run `forecast configure` to pick a supported backend.")
            }),
            None => Ok(RngBackend::default()),
        }
    }

    /// Store backend as string.
    pub fn set_rng_backend(&mut self, backend: RngBackend) {
        self.rng_backend = Some(backend.as_str().to_string());
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        info!("saved configuration to {}", path.display());
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "temp-forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid configuration TOML")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }
}
