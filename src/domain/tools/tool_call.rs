//! Tool call and response types.
//!
//! These are the request/response value objects for tool execution.

use serde::{Deserialize, Serialize};

/// A request to invoke a booking tool.
///
/// Parameters are passed as JSON to support the varying schemas of
/// different tools.
///
/// # Examples
///
/// ```
/// use travel_desk::domain::tools::ToolCall;
///
/// let call = ToolCall::new(
///     "update_field",
///     serde_json::json!({
///         "field": "travelPlan.goingTo",
///         "value": "Hyderabad"
///     }),
/// );
/// assert_eq!(call.name(), "update_field");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    name: String,
    #[serde(default)]
    parameters: serde_json::Value,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, parameters: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }

    /// Creates a call for a tool that takes no parameters.
    pub fn without_parameters(name: impl Into<String>) -> Self {
        Self::new(name, serde_json::json!({}))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &serde_json::Value {
        &self.parameters
    }

    pub fn into_parameters(self) -> serde_json::Value {
        self.parameters
    }
}

/// Response from executing a booking tool.
///
/// A rejected value is a normal outcome, not an execution failure: it comes
/// back as an error response carrying the message to relay to the traveller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    success: bool,
    data: Option<serde_json::Value>,
    error: Option<String>,
    error_code: Option<String>,
    /// Set when the call changed the booking context
    context_updated: bool,
}

impl ToolResponse {
    /// Creates a successful response with data.
    pub fn success(data: serde_json::Value, context_updated: bool) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            error_code: None,
            context_updated,
        }
    }

    /// Creates an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            error_code: None,
            context_updated: false,
        }
    }

    /// Attaches an error code to the response.
    pub fn with_code(mut self, code: impl ToString) -> Self {
        self.error_code = Some(code.to_string());
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> Option<&serde_json::Value> {
        self.data.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    /// Returns whether the booking context was changed.
    pub fn context_updated(&self) -> bool {
        self.context_updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_call_new_creates_with_params() {
        let call = ToolCall::new("set_selected_flight", serde_json::json!({"option": "2"}));

        assert_eq!(call.name(), "set_selected_flight");
        assert_eq!(call.parameters()["option"], "2");
    }

    #[test]
    fn tool_call_without_parameters_uses_empty_object() {
        let call = ToolCall::without_parameters("get_pending_fields");
        assert!(call.parameters().as_object().unwrap().is_empty());
    }

    #[test]
    fn tool_call_deserializes_without_parameters() {
        let call: ToolCall = serde_json::from_str(r#"{"name": "reset_state"}"#).unwrap();
        assert_eq!(call.name(), "reset_state");
        assert!(call.parameters().is_null());
    }

    #[test]
    fn tool_call_into_parameters_consumes() {
        let call = ToolCall::new("update_field", serde_json::json!({"value": "air"}));
        assert_eq!(call.into_parameters()["value"], "air");
    }

    #[test]
    fn tool_response_success_creates_success() {
        let response = ToolResponse::success(serde_json::json!("done"), true);

        assert!(response.is_success());
        assert!(response.context_updated());
        assert!(response.data().is_some());
        assert!(response.error_message().is_none());
    }

    #[test]
    fn tool_response_error_creates_error() {
        let response = ToolResponse::error("Invalid field name: x").with_code("UNKNOWN_FIELD");

        assert!(!response.is_success());
        assert!(!response.context_updated());
        assert!(response.data().is_none());
        assert_eq!(response.error_message(), Some("Invalid field name: x"));
        assert_eq!(response.error_code(), Some("UNKNOWN_FIELD"));
    }

    #[test]
    fn tool_response_serializes_to_json() {
        let response = ToolResponse::success(serde_json::json!({"ok": true}), false);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("success"));
        assert!(json.contains("context_updated"));
    }
}
