//! Environment loader: capture, validate and type the startup environment.

use std::path::PathBuf;

use crate::domain::errors::{EnvError, EnvResult};
use crate::domain::models::{Env, EnvSchema, RawEnv};
use crate::domain::ports::{EnvSource, Validator};
use crate::infrastructure::env::{load_dotenv, ProcessEnv, DEFAULT_DOTENV_FILE};
use crate::infrastructure::validators::SchemaValidator;

/// Loads a validated configuration record from an environment source.
///
/// Every call re-reads the source; the returned record is owned by the caller
/// and is meant to be built once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct EnvironmentLoader<S: EnvSource = ProcessEnv, V = SchemaValidator> {
    source: S,
    validator: V,
    schema: EnvSchema,
    dotenv: Option<PathBuf>,
}

impl EnvironmentLoader {
    /// Loader over the process environment with the API schema.
    pub fn new() -> Self {
        Self::with_source(ProcessEnv)
    }
}

impl Default for EnvironmentLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EnvSource> EnvironmentLoader<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            validator: SchemaValidator,
            schema: EnvSchema::api(),
            dotenv: None,
        }
    }
}

impl<S: EnvSource, V> EnvironmentLoader<S, V> {
    /// Swap the validation backend.
    pub fn with_validator<W>(self, validator: W) -> EnvironmentLoader<S, W> {
        EnvironmentLoader {
            source: self.source,
            validator,
            schema: self.schema,
            dotenv: self.dotenv,
        }
    }

    pub fn with_schema(mut self, schema: EnvSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Load `path` into the process environment before every read.
    pub fn with_dotenv(mut self, path: impl Into<PathBuf>) -> Self {
        self.dotenv = Some(path.into());
        self
    }

    pub const fn schema(&self) -> &EnvSchema {
        &self.schema
    }

    /// Capture the raw values of every schema field.
    pub fn capture(&self) -> RawEnv {
        if let Some(path) = &self.dotenv {
            load_dotenv(path);
        }
        RawEnv::capture(&self.schema, &self.source)
    }

    /// Read, validate and type the environment.
    ///
    /// All fields are checked before failing; the error lists each invalid
    /// or missing field with its reasons.
    pub fn load<T>(&self) -> EnvResult<T>
    where
        V: Validator<T>,
    {
        let raw = self.capture();

        match self.validator.validate(&self.schema, &raw) {
            Ok(value) => {
                tracing::debug!(fields = self.schema.len(), "environment validated");
                Ok(value)
            }
            Err(failure) => {
                tracing::warn!(
                    invalid = ?failure.fields().collect::<Vec<_>>(),
                    "environment validation failed"
                );
                Err(EnvError::ConfigurationInvalid(failure))
            }
        }
    }
}

/// Load the API environment from the process.
pub fn load() -> EnvResult<Env> {
    EnvironmentLoader::new().load()
}

/// Load `./.env` into the process environment, then load the API environment.
pub fn load_with_dotenv() -> EnvResult<Env> {
    EnvironmentLoader::new()
        .with_dotenv(DEFAULT_DOTENV_FILE)
        .load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ValidationFailure;
    use crate::domain::models::{FieldSpec, RawValue, Rule};
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_load_valid_url() {
        let loader =
            EnvironmentLoader::with_source(source(&[("NEXT_PUBLIC_API_URL", "https://api.example.com")]));

        let env: Env = loader.load().unwrap();

        assert_eq!(
            env,
            Env {
                api_url: "https://api.example.com".to_string()
            }
        );
    }

    #[test]
    fn test_load_missing_url() {
        let loader = EnvironmentLoader::with_source(source(&[]));

        let err = loader.load::<Env>().unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("Invalid env provided.\n"));
        assert!(message.contains("- API_URL: Required"));
    }

    #[test]
    fn test_logical_name_is_not_read_directly() {
        let loader = EnvironmentLoader::with_source(source(&[("API_URL", "https://wrong")]));

        assert!(loader.load::<Env>().is_err());
    }

    #[test]
    fn test_load_is_idempotent() {
        let loader = EnvironmentLoader::with_source(source(&[("NEXT_PUBLIC_API_URL", "https://a")]));

        let first: Env = loader.load().unwrap();
        let second: Env = loader.load().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_aggregates_every_invalid_field() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Wide {
            #[serde(rename = "API_URL")]
            api_url: String,
            #[serde(rename = "WS_URL")]
            ws_url: String,
            #[serde(rename = "TOKEN")]
            token: String,
        }

        let schema = EnvSchema::new(vec![
            FieldSpec::new("API_URL", "NEXT_PUBLIC_API_URL", Rule::NonEmptyString),
            FieldSpec::new("WS_URL", "NEXT_PUBLIC_WS_URL", Rule::NonEmptyString),
            FieldSpec::new("TOKEN", "APP_TOKEN", Rule::String),
        ]);
        let loader = EnvironmentLoader::with_source(source(&[("NEXT_PUBLIC_WS_URL", "")]))
            .with_schema(schema);

        let err = loader.load::<Wide>().unwrap_err();

        assert_eq!(
            err.failure().fields().collect::<Vec<_>>(),
            vec!["API_URL", "WS_URL", "TOKEN"]
        );
        let message = err.to_string();
        assert!(message.contains("- API_URL: Required"));
        assert!(message.contains("- WS_URL: String must contain at least 1 character(s)"));
        assert!(message.contains("- TOKEN: Required"));
    }

    struct RejectAll;

    impl Validator<Env> for RejectAll {
        fn validate(&self, schema: &EnvSchema, _raw: &RawEnv) -> Result<Env, ValidationFailure> {
            let mut failure = ValidationFailure::new();
            for field in schema.fields() {
                failure.push(field.name.as_str(), "rejected");
            }
            Err(failure)
        }
    }

    #[test]
    fn test_custom_validator_is_used() {
        let loader = EnvironmentLoader::with_source(source(&[("NEXT_PUBLIC_API_URL", "https://a")]))
            .with_validator(RejectAll);

        let err = loader.load::<Env>().unwrap_err();

        assert_eq!(err.to_string().lines().last(), Some("- API_URL: rejected"));
    }

    #[test]
    fn test_capture_reflects_source() {
        let loader = EnvironmentLoader::with_source(source(&[("NEXT_PUBLIC_API_URL", "x")]));

        assert_eq!(loader.capture().get("API_URL"), &RawValue::Text("x".to_string()));
    }
}
