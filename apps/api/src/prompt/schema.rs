//! Schema-guided output — a list of named fields compiled into formatting instructions
//! for the model, and the matching parser for its reply.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Reply is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Expected a JSON object, got: {0}")]
    NotAnObject(String),

    #[error("Expected key `{field}` to be present, but got {got}")]
    MissingField { field: String, got: String },
}

/// One field the model must produce, described in plain language.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSchema {
    pub name: String,
    pub description: String,
    pub type_hint: String,
}

impl ResponseSchema {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            type_hint: "string".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StructuredOutputParser {
    schemas: Vec<ResponseSchema>,
}

impl StructuredOutputParser {
    pub fn new(schemas: Vec<ResponseSchema>) -> Self {
        Self { schemas }
    }

    /// The instruction block appended to the prompt.
    pub fn format_instructions(&self) -> String {
        let fields: Vec<String> = self
            .schemas
            .iter()
            .map(|s| format!("\t\"{}\": {}  // {}", s.name, s.type_hint, s.description))
            .collect();

        format!(
            "The output should be a markdown code snippet formatted in the following schema, \
             including the leading and trailing \"```json\" and \"```\":\n\n\
             ```json\n{{\n{}\n}}\n```",
            fields.join("\n")
        )
    }

    /// Parses the model's reply into field → value. Every declared field must be present.
    pub fn parse(&self, reply: &str) -> Result<Map<String, Value>, SchemaError> {
        let value: Value = serde_json::from_str(extract_json_block(reply))?;
        let fields = match value {
            Value::Object(fields) => fields,
            other => return Err(SchemaError::NotAnObject(other.to_string())),
        };

        if let Some(missing) = self.schemas.iter().find(|s| !fields.contains_key(&s.name)) {
            return Err(SchemaError::MissingField {
                field: missing.name.clone(),
                got: Value::Object(fields).to_string(),
            });
        }

        Ok(fields)
    }
}

/// Returns the body of the first ```json ... ``` (or bare ```) fence, else the trimmed text.
pub fn extract_json_block(text: &str) -> &str {
    let text = text.trim();
    let Some(start) = text.find("```") else {
        return text;
    };
    let after = &text[start + 3..];
    let after = after.strip_prefix("json").unwrap_or(after);
    match after.find("```") {
        Some(end) => after[..end].trim(),
        None => after.trim(),
    }
}
