//! # Output Rendering
//!
//! Text output prints the bare value so it can be captured with `$(...)`.
//! JSON output prints one object per invocation.

use clap::ValueEnum;
use serde::Serialize;
use serde_json::{Map, Value};
use vault_user::UserIdentity;

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Bare value, one per line.
    #[default]
    Text,
    /// JSON object.
    Json,
}

/// A single converted value, keyed by the name of the form it is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The value as supplied on the command line.
    pub input: String,
    /// Field name of the produced form (`id`, `handle`, or `uuid`).
    pub kind: &'static str,
    /// The produced value.
    pub output: Value,
}

impl Conversion {
    /// Build a conversion record.
    pub fn new(
        input: impl Into<String>,
        kind: &'static str,
        output: impl Serialize,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            input: input.into(),
            kind,
            output: serde_json::to_value(output)?,
        })
    }

    /// Render the conversion in the requested format.
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Text => Ok(match &self.output {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
            OutputFormat::Json => {
                let mut map = Map::new();
                map.insert("input".to_string(), Value::String(self.input.clone()));
                map.insert(self.kind.to_string(), self.output.clone());
                Ok(serde_json::to_string(&Value::Object(map))?)
            }
        }
    }
}

/// Render a fully resolved identity.
pub fn render_identity(identity: &UserIdentity, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "id:     {}\nhandle: {}\nuuid:   {}",
            identity.id, identity.handle, identity.uuid
        )),
        OutputFormat::Json => Ok(serde_json::to_string(identity)?),
    }
}
