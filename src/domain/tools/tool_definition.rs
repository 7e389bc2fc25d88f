//! Tool metadata published to agents.

use serde::{Deserialize, Serialize};

/// Name, description and JSON Schema of one invocable tool. Renders into
/// the OpenAI and Anthropic tool-calling shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    name: String,
    description: String,
    parameters_schema: serde_json::Value,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters_schema,
        }
    }

    /// Creates a definition for a tool without parameters.
    pub fn no_params(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(
            name,
            description,
            serde_json::json!({"type": "object", "properties": {}}),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parameters_schema(&self) -> &serde_json::Value {
        &self.parameters_schema
    }

    /// Names of the parameters the schema marks as required.
    pub fn required_parameters(&self) -> Vec<&str> {
        self.parameters_schema
            .get("required")
            .and_then(|required| required.as_array())
            .map(|names| names.iter().filter_map(|name| name.as_str()).collect())
            .unwrap_or_default()
    }

    /// Converts to OpenAI tool format.
    pub fn to_openai_format(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters_schema
            }
        })
    }

    /// Converts to Anthropic tool format.
    pub fn to_anthropic_format(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "input_schema": self.parameters_schema
        })
    }
}
