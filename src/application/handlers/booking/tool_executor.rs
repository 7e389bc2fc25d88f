//! BookingToolExecutor - runs booking tools against a live session.
//!
//! Resolves the session, takes its lock for the duration of the call and
//! dispatches to the matching booking operation. Rejected values are
//! returned as failed [`ToolResponse`]s so the calling agent can re-ask.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::domain::assistant::AgentRole;
use crate::domain::booking::{BookingError, BookingSession, Field};
use crate::domain::flight::FlightCatalog;
use crate::domain::foundation::ValidationError;
use crate::domain::tools::{
    booking_registry, BookingTool, GetBookingSummaryParams, SetSelectedFlightParams, ToolCall,
    ToolDefinition, ToolRegistry, ToolResponse, UpdateFieldParams,
};
use crate::ports::{SessionStore, ToolExecutionContext, ToolExecutionError, ToolExecutor};

/// Executes [`BookingTool`]s for the session named in the execution context.
pub struct BookingToolExecutor {
    store: Arc<dyn SessionStore>,
    registry: ToolRegistry,
}

impl BookingToolExecutor {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            registry: booking_registry(),
        }
    }

    fn resolve(&self, call: &ToolCall) -> Result<BookingTool, ToolExecutionError> {
        call.name()
            .parse::<BookingTool>()
            .map_err(ToolExecutionError::ToolNotFound)
    }

    fn check_role(
        &self,
        tool: BookingTool,
        role: Option<AgentRole>,
    ) -> Result<(), ToolExecutionError> {
        match role {
            Some(role) if !self.registry.is_available_for_role(tool.name(), role) => {
                Err(ToolExecutionError::ToolNotPermitted {
                    tool: tool.name().to_string(),
                    role,
                })
            }
            _ => Ok(()),
        }
    }

    fn dispatch(
        &self,
        tool: BookingTool,
        call: &ToolCall,
        session: &mut BookingSession,
    ) -> Result<ToolResponse, ToolExecutionError> {
        let response = match tool {
            BookingTool::UpdateField => {
                let params: UpdateFieldParams = parse_params(call)?;
                match session.update_field(&params.field, &params.value) {
                    Ok(message) => ToolResponse::success(json!(message), true),
                    Err(err) => rejected(session, tool, err),
                }
            }
            BookingTool::GetPendingFields => {
                ToolResponse::success(paths(&session.context().pending_fields()), false)
            }
            BookingTool::GetFilledFields => {
                ToolResponse::success(paths(&session.context().filled_fields()), false)
            }
            BookingTool::GetNextQuestion => {
                ToolResponse::success(json!(session.context().next_question()), false)
            }
            BookingTool::GetNextNode => {
                ToolResponse::success(json!(session.context().next_node()), false)
            }
            BookingTool::GetContext => {
                let snapshot = serde_json::to_value(session.context().snapshot())
                    .map_err(|e| ToolExecutionError::system(e.to_string()))?;
                ToolResponse::success(snapshot, false)
            }
            BookingTool::ResetState => ToolResponse::success(json!(session.reset()), true),
            BookingTool::SetSelectedFlight => {
                let params: SetSelectedFlightParams = parse_params(call)?;
                match session.select_flight(&params.option) {
                    Ok(message) => ToolResponse::success(json!(message), true),
                    Err(err) => rejected(session, tool, err),
                }
            }
            BookingTool::ListFlightOptions => ToolResponse::success(flight_options()?, false),
            BookingTool::GetBookingSummary => {
                let params: GetBookingSummaryParams = parse_params(call)?;
                match session.summarize() {
                    Ok(summary) => {
                        let data = summary
                            .render(params.format)
                            .map_err(ToolExecutionError::system)?;
                        ToolResponse::success(data, false)
                    }
                    Err(err) => rejected(session, tool, err),
                }
            }
        };

        Ok(response)
    }
}

#[async_trait]
impl ToolExecutor for BookingToolExecutor {
    async fn execute(
        &self,
        call: ToolCall,
        context: ToolExecutionContext,
    ) -> Result<ToolResponse, ToolExecutionError> {
        let tool = self.resolve(&call)?;
        self.check_role(tool, context.role())?;
        self.validate(&call)?;

        let handle = self.store.get(&context.session_id).await?;
        let mut session = handle.lock().await;

        tracing::info!(
            session_id = %context.session_id,
            tool = %tool,
            trigger = %context.trigger,
            task = ?context.task,
            "Tool invoked"
        );

        self.dispatch(tool, &call, &mut session)
    }

    fn available_tools(&self, role: Option<AgentRole>) -> Vec<ToolDefinition> {
        let tools = match role {
            Some(role) => self.registry.tools_for_role(role, true),
            None => self.registry.all_tools(),
        };
        tools.into_iter().cloned().collect()
    }

    fn validate(&self, call: &ToolCall) -> Result<(), ToolExecutionError> {
        match self.resolve(call)? {
            BookingTool::UpdateField => parse_params::<UpdateFieldParams>(call).map(|_| ()),
            BookingTool::SetSelectedFlight => {
                parse_params::<SetSelectedFlightParams>(call).map(|_| ())
            }
            BookingTool::GetBookingSummary => {
                parse_params::<GetBookingSummaryParams>(call).map(|_| ())
            }
            _ => Ok(()),
        }
    }

    fn has_tool(&self, name: &str) -> bool {
        self.registry.has_tool(name)
    }

    fn get_tool(&self, name: &str) -> Option<ToolDefinition> {
        self.registry.get_tool(name).cloned()
    }
}

/// Absent parameters decode as an empty object.
fn parse_params<T: DeserializeOwned>(call: &ToolCall) -> Result<T, ToolExecutionError> {
    let raw = match call.parameters() {
        Value::Null => json!({}),
        other => other.clone(),
    };
    serde_json::from_value(raw).map_err(|e| {
        ToolExecutionError::ValidationFailed(ValidationError::invalid_format(
            "parameters",
            e.to_string(),
        ))
    })
}

fn paths(fields: &[Field]) -> Value {
    json!(fields.iter().map(Field::path).collect::<Vec<_>>())
}

fn flight_options() -> Result<Value, ToolExecutionError> {
    let mut options = Vec::with_capacity(FlightCatalog::options().len());
    for option in FlightCatalog::options() {
        let details = option
            .details()
            .map_err(|e| ToolExecutionError::system(e.to_string()))?;
        options.push(json!({
            "id": option.id,
            "entry": option.entry,
            "flight": details,
        }));
    }
    Ok(Value::Array(options))
}

fn rejected(session: &BookingSession, tool: BookingTool, err: BookingError) -> ToolResponse {
    tracing::warn!(
        session_id = %session.id(),
        tool = %tool,
        code = %err.code(),
        error = %err,
        "Tool call rejected"
    );
    ToolResponse::error(err.to_string()).with_code(err.code())
}
