//! Implementation of the `envgate check` command.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::application::bootstrap;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{DotenvSettings, Env};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Load the dotenv file into the environment before validating
    #[arg(long)]
    pub dotenv: bool,

    /// Dotenv file to load (implies --dotenv)
    #[arg(long, value_name = "PATH")]
    pub dotenv_path: Option<PathBuf>,
}

impl CheckArgs {
    /// Apply the command-line flags on top of the configured dotenv settings.
    pub fn dotenv_settings(&self, configured: &DotenvSettings) -> DotenvSettings {
        let mut settings = configured.clone();
        if self.dotenv {
            settings.enabled = true;
        }
        if let Some(path) = &self.dotenv_path {
            settings.enabled = true;
            settings.path.clone_from(path);
        }
        settings
    }
}

#[derive(Debug, serde::Serialize)]
pub struct CheckOutput {
    pub valid: bool,
    pub env: Env,
}

impl From<&Env> for CheckOutput {
    fn from(env: &Env) -> Self {
        Self {
            valid: true,
            env: env.clone(),
        }
    }
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        ["Environment is valid.".to_string(), format!("  API_URL = {}", self.env.api_url)].join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: &CheckArgs, configured: &DotenvSettings, json_mode: bool) -> Result<()> {
    let env = bootstrap(&args.dotenv_settings(configured))?;
    report(&env, json_mode);
    Ok(())
}

pub fn report(env: &Env, json_mode: bool) {
    output(&CheckOutput::from(env), json_mode);
}
