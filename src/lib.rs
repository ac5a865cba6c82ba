//! Envgate - startup environment loader
//!
//! Envgate reads the variables an application needs from the process
//! environment (optionally seeded from a `.env` file), validates all of them
//! against a schema, and returns a typed record or one error naming every
//! missing or invalid field.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): schema, raw and validated models, ports
//! - **Application Layer** (`application`): startup wiring
//! - **Service Layer** (`services`): the environment loader
//! - **Infrastructure Layer** (`infrastructure`): process env, dotenv,
//!   validation, settings, logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! fn main() -> anyhow::Result<()> {
//!     let env = envgate::load()?;
//!     println!("API at {}", env.api_url);
//!     Ok(())
//! }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use application::bootstrap;
pub use domain::errors::{EnvError, EnvResult, FieldError, ValidationFailure};
pub use domain::models::{DotenvSettings, Env, EnvSchema, FieldSpec, RawEnv, RawValue, Rule, Settings};
pub use domain::ports::{EnvSource, Validator};
pub use infrastructure::config::{ConfigLoader, SettingsError};
pub use infrastructure::env::{load_dotenv, DotenvOutcome, ProcessEnv};
pub use infrastructure::validators::SchemaValidator;
pub use services::{load, load_with_dotenv, EnvironmentLoader};
