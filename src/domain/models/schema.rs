use serde::Serialize;
use std::fmt;

/// Variable the API base URL is read from.
pub const API_URL_VAR: &str = "NEXT_PUBLIC_API_URL";

/// Logical field name for the API base URL.
pub const API_URL_FIELD: &str = "API_URL";

/// Validation rule applied to a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Present and valid unicode
    String,
    /// Present, valid unicode and not empty
    NonEmptyString,
}

impl Rule {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::NonEmptyString => "non-empty string",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single schema entry: logical name, source variable and rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Logical field name, used in the typed record and in diagnostics
    pub name: String,
    /// Environment variable the value is read from
    pub var: String,
    pub rule: Rule,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, var: impl Into<String>, rule: Rule) -> Self {
        Self {
            name: name.into(),
            var: var.into(),
            rule,
        }
    }
}

/// Ordered set of required fields.
///
/// Field order is significant: raw capture and failure reports follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvSchema {
    fields: Vec<FieldSpec>,
}

impl EnvSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// The schema the application ships with: the API base URL.
    pub fn api() -> Self {
        Self::new(vec![FieldSpec::new(
            API_URL_FIELD,
            API_URL_VAR,
            Rule::NonEmptyString,
        )])
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for EnvSchema {
    fn default() -> Self {
        Self::api()
    }
}
