//! Port through which agents reach a session's booking context.
//!
//! A rejected field value is an ordinary answer (`Ok` with a failed
//! [`ToolResponse`]). `Err` is reserved for calls that never reached the
//! context: unknown tool, wrong role, malformed parameters, missing session.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::assistant::{AgentRole, AssistantTask};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, ValidationError};
use crate::domain::tools::{ToolCall, ToolDefinition, ToolResponse};

use super::SessionStoreError;

/// Port for executing booking tools.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Runs `call` against the session named in `context`.
    async fn execute(
        &self,
        call: ToolCall,
        context: ToolExecutionContext,
    ) -> Result<ToolResponse, ToolExecutionError>;

    /// Tools available to a role, or every tool when `role` is `None`.
    fn available_tools(&self, role: Option<AgentRole>) -> Vec<ToolDefinition>;

    /// Parameter check only; the session is not touched.
    fn validate(&self, call: &ToolCall) -> Result<(), ToolExecutionError>;

    fn has_tool(&self, name: &str) -> bool;

    fn get_tool(&self, name: &str) -> Option<ToolDefinition>;
}

/// Who is calling, for which session, and why.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolExecutionContext {
    /// Session the call applies to
    pub session_id: SessionId,

    /// Orchestration task that issued the call, if known
    pub task: Option<AssistantTask>,

    /// Free-text reason, logged with the invocation
    pub trigger: String,
}

impl ToolExecutionContext {
    pub fn new(session_id: SessionId, trigger: impl Into<String>) -> Self {
        Self {
            session_id,
            task: None,
            trigger: trigger.into(),
        }
    }

    /// Sets the originating task.
    pub fn with_task(mut self, task: AssistantTask) -> Self {
        self.task = Some(task);
        self
    }

    /// Role of the agent making the call, derived from the task.
    pub fn role(&self) -> Option<AgentRole> {
        self.task.map(|task| task.agent())
    }
}

/// A call that could not be applied to any booking context.
#[derive(Debug, Clone, Error)]
pub enum ToolExecutionError {
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Tool exists but the calling role may not use it
    #[error("Tool '{tool}' is not available to the {role} agent")]
    ToolNotPermitted { tool: String, role: AgentRole },

    #[error("Validation error: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error(transparent)]
    Session(#[from] SessionStoreError),

    #[error("System error: {0}")]
    SystemError(String),
}

impl ToolExecutionError {
    pub fn system(message: impl Into<String>) -> Self {
        Self::SystemError(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ToolExecutionError::ToolNotFound(_) => ErrorCode::ToolNotFound,
            ToolExecutionError::ToolNotPermitted { .. } => ErrorCode::ToolNotPermitted,
            ToolExecutionError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            ToolExecutionError::Session(SessionStoreError::NotFound(_)) => {
                ErrorCode::SessionNotFound
            }
            ToolExecutionError::Session(SessionStoreError::CapacityExceeded(_)) => {
                ErrorCode::SessionLimitReached
            }
            ToolExecutionError::SystemError(_) => ErrorCode::InternalError,
        }
    }
}

impl From<ToolExecutionError> for DomainError {
    fn from(err: ToolExecutionError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
