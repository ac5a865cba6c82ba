use crate::domain::errors::ValidationFailure;
use crate::domain::models::{EnvSchema, RawEnv};

/// Port for turning raw environment values into a typed record.
///
/// Implementations must check every schema field before returning, so a
/// failure lists all offending fields rather than the first one found.
pub trait Validator<T> {
    fn validate(&self, schema: &EnvSchema, raw: &RawEnv) -> Result<T, ValidationFailure>;
}
