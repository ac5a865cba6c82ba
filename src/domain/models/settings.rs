use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings of the envgate tool itself
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Dotenv file handling
    #[serde(default)]
    pub dotenv: DotenvSettings,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingSettings {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Dotenv file handling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DotenvSettings {
    /// Load the dotenv file before reading the environment
    #[serde(default)]
    pub enabled: bool,

    /// Path of the dotenv file
    #[serde(default = "default_dotenv_path")]
    pub path: PathBuf,
}

fn default_dotenv_path() -> PathBuf {
    PathBuf::from(".env")
}

impl Default for DotenvSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_dotenv_path(),
        }
    }
}
