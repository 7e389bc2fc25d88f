//! Data transfer objects for booking HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::assistant::{AgentRole, AssistantTask};
use crate::domain::booking::BookingStage;
use crate::domain::foundation::ErrorCode;
use crate::ports::{SessionStoreError, ToolExecutionError};

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Request to invoke a tool against a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvokeToolRequest {
    pub tool_name: String,
    #[serde(default)]
    pub parameters: serde_json::Value,
    /// Orchestration task issuing the call; restricts tools to its agent
    pub task: Option<AssistantTask>,
    /// What prompted the call (for logging)
    pub trigger: Option<String>,
}

/// Query parameters for listing tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListToolsQuery {
    /// Agent role to list tools for; every tool when absent
    pub role: Option<AgentRole>,
    /// Output format: "openai" or "anthropic" or "native"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "native".to_string()
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Response from opening a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartSessionResponse {
    pub session_id: String,
    pub stage: BookingStage,
    pub next_question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListToolsResponse {
    pub role: Option<AgentRole>,
    pub format: String,
    pub count: usize,
    /// Definitions rendered in `format`
    pub tools: serde_json::Value,
}

/// Response from invoking a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvokeToolResponse {
    pub invocation_id: String,
    pub tool_name: String,
    pub success: bool,
    pub result: Option<serde_json::Value>,
    pub error: Option<String>,
    /// Stable error code (if failed)
    pub error_code: Option<String>,
    /// Whether the booking context changed
    pub context_updated: bool,
    /// Wall-clock time spent in the executor
    pub duration_ms: u64,
}

/// Liveness report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub active_sessions: usize,
}

/// Body of every non-2xx reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&SessionStoreError> for ErrorResponse {
    fn from(err: &SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(_) => Self::new(ErrorCode::SessionNotFound, err.to_string()),
            SessionStoreError::CapacityExceeded(max) => {
                Self::new(ErrorCode::SessionLimitReached, err.to_string())
                    .with_details(serde_json::json!({ "max_sessions": max }))
            }
        }
    }
}

impl From<&ToolExecutionError> for ErrorResponse {
    fn from(err: &ToolExecutionError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}
