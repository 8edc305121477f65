//! Configuration for articlecontrol

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::validator::ValidationRules;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Validation cascade constants
    pub validation: ValidationRules,

    /// Auxiliary report settings
    pub reports: ReportsConfig,

    /// Log level (trace, debug, info, warn, error)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

/// Auxiliary report settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportsConfig {
    /// Weeks shown in the historical grid
    #[serde(rename = "grid-weeks")]
    pub grid_weeks: usize,

    /// Half-width of the random prediction adjustment
    #[serde(rename = "prediction-jitter")]
    pub prediction_jitter: f64,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            grid_weeks: crate::DEFAULT_GRID_WEEKS,
            prediction_jitter: crate::DEFAULT_PREDICTION_JITTER,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .articlecontrol.yml
        let local_config = PathBuf::from(".articlecontrol.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/articlecontrol/articlecontrol.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("articlecontrol").join("articlecontrol.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read only the log level, ignoring any other problem with the file
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        Self::load(config_path).ok().and_then(|c| c.log_level)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Reject values the validator and reports cannot work with
    pub fn validate(&self) -> Result<()> {
        let rules = &self.validation;
        for (name, value) in [
            ("threshold-ratio", rules.threshold_ratio),
            ("high-variability-cv", rules.high_variability_cv),
            ("iqr-factor", rules.iqr_factor),
            ("prediction-jitter", self.reports.prediction_jitter),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(eyre::eyre!("{} must be a non-negative number, got {}", name, value));
            }
        }
        if self.reports.grid_weeks == 0 || self.reports.grid_weeks > crate::MAX_GRID_WEEKS {
            return Err(eyre::eyre!(
                "grid-weeks must be between 1 and {}, got {}",
                crate::MAX_GRID_WEEKS,
                self.reports.grid_weeks
            ));
        }
        Ok(())
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
