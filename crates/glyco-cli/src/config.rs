//! Configuration management for Glyco CLI.

use anyhow::{Context, Result};
use glyco::predictor::BASE_URL_ENV;
use glyco::prelude::PredictorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Glyco configuration, read from `glyco.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub predictor: PredictorSection,
    #[serde(default)]
    pub intake: IntakeSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictorSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Substitute a local estimate when the predictor is unreachable.
    #[serde(default = "default_fallback_to_mock")]
    pub fallback_to_mock: bool,
    #[serde(default = "default_health_interval_secs")]
    pub health_interval_secs: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntakeSection {
    /// Reject vitals outside the accepted input ranges.
    #[serde(default)]
    pub strict_validation: bool,
}

// Default value functions
fn default_base_url() -> String { PredictorConfig::default().base_url }
fn default_timeout_secs() -> u64 { PredictorConfig::default().timeout_secs }
fn default_fallback_to_mock() -> bool { true }
fn default_health_interval_secs() -> u64 { 30 }

impl Default for PredictorSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            fallback_to_mock: default_fallback_to_mock(),
            health_interval_secs: default_health_interval_secs(),
        }
    }
}

impl Config {
    /// Load config from glyco.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        if let Some(path) = find_config_file() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Predictor settings. `GLYCO_API_URL` overrides `predictor.base_url`.
    pub fn predictor_config(&self) -> PredictorConfig {
        let config = PredictorConfig::default()
            .with_base_url(self.predictor.base_url.as_str())
            .with_timeout(self.predictor.timeout_secs);
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => config.with_base_url(url),
            _ => config,
        }
    }
}

/// Find glyco.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join("glyco.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
