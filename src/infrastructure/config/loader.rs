use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::Settings;
use crate::infrastructure::logging::{LogConfig, LogFormat};

/// Project settings file, resolved against the working directory.
pub const SETTINGS_FILE: &str = "envgate.yaml";

/// Prefix of environment variables that override settings.
pub const SETTINGS_ENV_PREFIX: &str = "ENVGATE_";

/// Settings error types
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Dotenv path cannot be empty")]
    EmptyDotenvPath,
}

/// Settings loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. envgate.yaml in the working directory (optional)
    /// 3. Environment variables (ENVGATE_* prefix, `__` separates levels)
    pub fn load() -> Result<Settings> {
        Self::load_from_file(SETTINGS_FILE)
    }

    /// Load settings using a specific YAML file in place of envgate.yaml
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Settings> {
        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed(SETTINGS_ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| {
                format!("Failed to load settings from {}", path.as_ref().display())
            })?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate settings after loading
    pub fn validate(settings: &Settings) -> Result<(), SettingsError> {
        Self::log_config(settings)?;

        if settings.dotenv.path.as_os_str().is_empty() {
            return Err(SettingsError::EmptyDotenvPath);
        }

        Ok(())
    }

    /// Logger configuration derived from the logging settings
    pub fn log_config(settings: &Settings) -> Result<LogConfig, SettingsError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        let level = settings.logging.level.to_lowercase();
        if !valid_log_levels.contains(&level.as_str()) {
            return Err(SettingsError::InvalidLogLevel(settings.logging.level.clone()));
        }

        let format = match settings.logging.format.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => {
                return Err(SettingsError::InvalidLogFormat(
                    settings.logging.format.clone(),
                ))
            }
        };

        Ok(LogConfig { level, format })
    }
}
