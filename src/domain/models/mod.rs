pub mod env;
pub mod schema;
pub mod settings;

pub use env::{Env, RawEnv, RawValue};
pub use schema::{EnvSchema, FieldSpec, Rule, API_URL_FIELD, API_URL_VAR};
pub use settings::{DotenvSettings, LoggingSettings, Settings};
