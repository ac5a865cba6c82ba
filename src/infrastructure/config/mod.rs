//! Settings management infrastructure
//!
//! Hierarchical settings using figment:
//! - Programmatic defaults
//! - Optional YAML file
//! - Environment variable overrides
//! - Validation after extraction

pub mod loader;

pub use loader::{ConfigLoader, SettingsError, SETTINGS_ENV_PREFIX, SETTINGS_FILE};
