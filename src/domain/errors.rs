//! Domain errors for environment loading.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single invalid or missing field and every reason it failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub reasons: Vec<String>,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reasons: vec![reason.into()],
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}: {}", self.field, self.reasons.join(", "))
    }
}

/// Every field-level failure of one validation pass, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationFailure(Vec<FieldError>);

impl ValidationFailure {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Record `reason` against `field`, merging with an earlier entry for the
    /// same field.
    pub fn push(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        let field = field.into();
        let reason = reason.into();
        match self.0.iter_mut().find(|e| e.field == field) {
            Some(existing) => existing.reasons.push(reason),
            None => self.0.push(FieldError::new(field, reason)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.field.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }
}

impl From<Vec<FieldError>> for ValidationFailure {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl<'a> IntoIterator for &'a ValidationFailure {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&lines.join("\n"))
    }
}

/// Errors raised while loading the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvError {
    /// One or more required fields are absent or malformed. Fatal.
    #[error("Invalid env provided.\nThe following variables are missing or invalid:\n{0}")]
    ConfigurationInvalid(ValidationFailure),
}

impl EnvError {
    pub const fn failure(&self) -> &ValidationFailure {
        match self {
            Self::ConfigurationInvalid(failure) => failure,
        }
    }
}

pub type EnvResult<T> = Result<T, EnvError>;
