//! Schema-driven validation of raw environment values

use figment::error::Kind;
use figment::providers::Serialized;
use figment::Figment;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

use crate::domain::errors::ValidationFailure;
use crate::domain::models::{EnvSchema, RawEnv, RawValue, Rule};
use crate::domain::ports::Validator;

pub const REASON_REQUIRED: &str = "Required";
pub const REASON_NOT_UNICODE: &str = "Expected string, received non-unicode data";
pub const REASON_EMPTY: &str = "String must contain at least 1 character(s)";

/// Validates every schema field, then extracts the accepted values into the
/// target type through figment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator;

impl SchemaValidator {
    pub const fn new() -> Self {
        Self
    }

    /// Check a single raw value against `rule`.
    fn check(rule: Rule, value: &RawValue) -> Result<&str, &'static str> {
        match value {
            RawValue::Missing => Err(REASON_REQUIRED),
            RawValue::NotUnicode => Err(REASON_NOT_UNICODE),
            RawValue::Text(text) if rule == Rule::NonEmptyString && text.is_empty() => {
                Err(REASON_EMPTY)
            }
            RawValue::Text(text) => Ok(text),
        }
    }
}

impl<T: DeserializeOwned> Validator<T> for SchemaValidator {
    fn validate(&self, schema: &EnvSchema, raw: &RawEnv) -> Result<T, ValidationFailure> {
        let mut failure = ValidationFailure::new();
        let mut accepted = BTreeMap::new();

        for field in schema.fields() {
            match Self::check(field.rule, raw.get(&field.name)) {
                Ok(text) => {
                    accepted.insert(field.name.as_str(), text);
                }
                Err(reason) => failure.push(field.name.as_str(), reason),
            }
        }

        if !failure.is_empty() {
            return Err(failure);
        }

        Figment::from(Serialized::defaults(accepted))
            .extract::<T>()
            .map_err(extraction_failure)
    }
}

/// Map every figment extraction error onto the field it concerns.
fn extraction_failure(error: figment::Error) -> ValidationFailure {
    let mut failure = ValidationFailure::new();
    for err in error {
        let field = match (&err.kind, err.path.is_empty()) {
            (_, false) => err.path.join("."),
            (Kind::MissingField(name), true) => name.to_string(),
            (_, true) => "<root>".to_string(),
        };
        failure.push(field, err.kind.to_string());
    }
    failure
}
