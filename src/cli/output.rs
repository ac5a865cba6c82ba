//! Output formatting utilities for the CLI.

use serde::Serialize;

use crate::domain::errors::EnvError;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Render a command failure for stderr.
///
/// Environment failures keep their multi-line report; in JSON mode the
/// offending fields are listed alongside the message.
pub fn render_error(err: &anyhow::Error, json_mode: bool) -> String {
    let env_error = err.downcast_ref::<EnvError>();

    if json_mode {
        let mut body = serde_json::json!({ "error": err.to_string() });
        if let Some(env_error) = env_error {
            body["fields"] = serde_json::to_value(env_error.failure()).unwrap_or_default();
        }
        return serde_json::to_string_pretty(&body).unwrap_or_default();
    }

    match env_error {
        Some(env_error) => env_error.to_string(),
        None => format!("Error: {err:#}"),
    }
}

/// Print a command failure to stderr and exit non-zero.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    tracing::debug!(error = %err, "command failed");
    eprintln!("{}", render_error(err, json_mode));
    std::process::exit(1);
}
