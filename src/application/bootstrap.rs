//! Startup wiring: settings in, validated environment out.

use crate::domain::errors::EnvResult;
use crate::domain::models::{DotenvSettings, Env};
use crate::services::EnvironmentLoader;

/// Loader over the process environment, honouring the dotenv settings.
pub fn environment_loader(dotenv: &DotenvSettings) -> EnvironmentLoader {
    let loader = EnvironmentLoader::new();
    if dotenv.enabled {
        loader.with_dotenv(&dotenv.path)
    } else {
        loader
    }
}

/// Build the validated environment once, at program entry.
///
/// The result is handed to the rest of the program by reference.
pub fn bootstrap(dotenv: &DotenvSettings) -> EnvResult<Env> {
    let env: Env = environment_loader(dotenv).load()?;
    tracing::info!(api_url = %env.api_url, "environment loaded");
    Ok(env)
}
