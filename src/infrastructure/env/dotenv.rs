//! `.env` file loading
//!
//! Variables from the file are written into the process environment. Values
//! already present in the process are never overridden.

use std::path::{Path, PathBuf};

/// Default dotenv file name, resolved against the working directory.
pub const DEFAULT_DOTENV_FILE: &str = ".env";

/// What happened when a dotenv file was requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotenvOutcome {
    Loaded(PathBuf),
    NotFound(PathBuf),
    /// The file exists but could not be read or parsed. Lines before the
    /// offending one may already have been applied.
    Skipped { path: PathBuf, reason: String },
}

impl DotenvOutcome {
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Load `path` into the process environment.
///
/// A missing file is expected and only logged at debug. An unreadable or
/// malformed file is logged at warn and otherwise ignored; validation of the
/// resulting environment decides whether startup proceeds.
pub fn load_dotenv(path: impl AsRef<Path>) -> DotenvOutcome {
    let path = path.as_ref().to_path_buf();
    match dotenvy::from_path(&path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "loaded dotenv file");
            DotenvOutcome::Loaded(path)
        }
        Err(err) if err.not_found() => {
            tracing::debug!(path = %path.display(), "no dotenv file found");
            DotenvOutcome::NotFound(path)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unusable dotenv file");
            DotenvOutcome::Skipped {
                path,
                reason: err.to_string(),
            }
        }
    }
}
