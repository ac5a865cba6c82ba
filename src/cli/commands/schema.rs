//! Implementation of the `envgate schema` command.

use anyhow::Result;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{EnvSchema, FieldSpec};

#[derive(Debug, serde::Serialize)]
pub struct SchemaOutput {
    pub fields: Vec<FieldSpec>,
}

impl From<&EnvSchema> for SchemaOutput {
    fn from(schema: &EnvSchema) -> Self {
        Self {
            fields: schema.fields().to_vec(),
        }
    }
}

impl CommandOutput for SchemaOutput {
    fn to_human(&self) -> String {
        let name_width = self
            .fields
            .iter()
            .map(|f| f.name.len())
            .chain(std::iter::once("FIELD".len()))
            .max()
            .unwrap_or(0);
        let var_width = self
            .fields
            .iter()
            .map(|f| f.var.len())
            .chain(std::iter::once("VARIABLE".len()))
            .max()
            .unwrap_or(0);

        let mut lines = vec![format!("{:<name_width$}  {:<var_width$}  RULE", "FIELD", "VARIABLE")];
        for field in &self.fields {
            lines.push(format!(
                "{:<name_width$}  {:<var_width$}  {}",
                field.name, field.var, field.rule
            ));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(json_mode: bool) -> Result<()> {
    output(&SchemaOutput::from(&EnvSchema::api()), json_mode);
    Ok(())
}
