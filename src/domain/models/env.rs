use serde::{Deserialize, Serialize};
use std::env::VarError;

use super::schema::EnvSchema;
use crate::domain::ports::EnvSource;

/// Validated environment configuration.
///
/// Built once at program entry and handed to the components that need it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Env {
    /// Base URL of the backend API
    #[serde(rename = "API_URL")]
    pub api_url: String,
}

/// Raw value of a variable as found in the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Missing,
    Text(String),
    /// Set, but not valid unicode
    NotUnicode,
}

impl From<Result<String, VarError>> for RawValue {
    fn from(value: Result<String, VarError>) -> Self {
        match value {
            Ok(text) => Self::Text(text),
            Err(VarError::NotPresent) => Self::Missing,
            Err(VarError::NotUnicode(_)) => Self::NotUnicode,
        }
    }
}

/// Raw values keyed by logical field name, in schema order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEnv {
    entries: Vec<(String, RawValue)>,
}

impl RawEnv {
    /// Read every schema field's variable from `source`.
    pub fn capture<S: EnvSource + ?Sized>(schema: &EnvSchema, source: &S) -> Self {
        let entries = schema
            .fields()
            .iter()
            .map(|field| (field.name.clone(), RawValue::from(source.var(&field.var))))
            .collect();
        Self { entries }
    }

    /// Insert or replace the raw value for `field`.
    pub fn insert(&mut self, field: impl Into<String>, value: RawValue) {
        let field = field.into();
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == field) {
            entry.1 = value;
        } else {
            self.entries.push((field, value));
        }
    }

    /// Raw value for `field`; fields never captured read as missing.
    pub fn get(&self, field: &str) -> &RawValue {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map_or(&RawValue::Missing, |(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::schema::{FieldSpec, Rule};
    use std::collections::HashMap;
    use std::ffi::OsString;

    #[test]
    fn test_raw_value_from_var_result() {
        assert_eq!(
            RawValue::from(Ok("x".to_string())),
            RawValue::Text("x".to_string())
        );
        assert_eq!(RawValue::from(Err(VarError::NotPresent)), RawValue::Missing);
        assert_eq!(
            RawValue::from(Err(VarError::NotUnicode(OsString::from("x")))),
            RawValue::NotUnicode
        );
    }

    #[test]
    fn test_capture_maps_variables_to_fields() {
        let schema = EnvSchema::new(vec![
            FieldSpec::new("API_URL", "NEXT_PUBLIC_API_URL", Rule::NonEmptyString),
            FieldSpec::new("TOKEN", "APP_TOKEN", Rule::String),
        ]);
        let source: HashMap<String, String> =
            HashMap::from([("NEXT_PUBLIC_API_URL".to_string(), "https://a.b".to_string())]);

        let raw = RawEnv::capture(&schema, &source);

        assert_eq!(raw.get("API_URL"), &RawValue::Text("https://a.b".to_string()));
        assert_eq!(raw.get("TOKEN"), &RawValue::Missing);
        let order: Vec<_> = raw.iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["API_URL", "TOKEN"]);
    }

    #[test]
    fn test_insert_replaces_existing_entry() {
        let mut raw = RawEnv::default();
        raw.insert("API_URL", RawValue::Missing);
        raw.insert("API_URL", RawValue::Text("v".to_string()));

        assert_eq!(raw.iter().count(), 1);
        assert_eq!(raw.get("API_URL"), &RawValue::Text("v".to_string()));
    }

    #[test]
    fn test_env_serializes_with_logical_name() {
        let env = Env {
            api_url: "https://api.example.com".to_string(),
        };
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json, serde_json::json!({ "API_URL": "https://api.example.com" }));
    }
}
