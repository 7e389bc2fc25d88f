//! HTTP handlers for booking endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::booking::{
    EndSessionCommand, EndSessionHandler, GetProgressHandler, GetProgressQuery,
    StartSessionCommand, StartSessionHandler,
};
use crate::domain::foundation::{ErrorCode, SessionId};
use crate::domain::tools::ToolCall;
use crate::ports::{
    SessionStore, SessionStoreError, ToolExecutionContext, ToolExecutionError, ToolExecutor,
};

use super::dto::{
    ErrorResponse, HealthResponse, InvokeToolRequest, InvokeToolResponse, ListToolsQuery,
    ListToolsResponse, StartSessionResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Application state for booking endpoints.
#[derive(Clone)]
pub struct BookingAppState {
    pub store: Arc<dyn SessionStore>,
    pub executor: Arc<dyn ToolExecutor>,
    pub start_handler: Arc<StartSessionHandler>,
    pub end_handler: Arc<EndSessionHandler>,
    pub progress_handler: Arc<GetProgressHandler>,
}

impl BookingAppState {
    /// Wires every handler to the given store.
    pub fn new(store: Arc<dyn SessionStore>, executor: Arc<dyn ToolExecutor>) -> Self {
        Self {
            start_handler: Arc::new(StartSessionHandler::new(store.clone())),
            end_handler: Arc::new(EndSessionHandler::new(store.clone())),
            progress_handler: Arc::new(GetProgressHandler::new(store.clone())),
            store,
            executor,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Open a booking session
pub async fn start_session(State(state): State<BookingAppState>) -> Response {
    let cmd = StartSessionCommand {
        source: Some("http".to_string()),
    };

    match state.start_handler.handle(cmd).await {
        Ok(result) => {
            let response = StartSessionResponse {
                session_id: result.session_id.to_string(),
                stage: result.stage,
                next_question: result.next_question,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_store_error(e),
    }
}

/// DELETE /api/sessions/:session_id - End a session
pub async fn end_session(
    State(state): State<BookingAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.end_handler.handle(EndSessionCommand { session_id }).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_store_error(e),
    }
}

/// GET /api/sessions/:session_id/context - Snapshot of the booking context
pub async fn get_context(
    State(state): State<BookingAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.progress_handler.context(GetProgressQuery { session_id }).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_store_error(e),
    }
}

/// GET /api/sessions/:session_id/progress - Pending fields and next question
pub async fn get_progress(
    State(state): State<BookingAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.progress_handler.handle(GetProgressQuery { session_id }).await {
        Ok(progress) => (StatusCode::OK, Json(progress)).into_response(),
        Err(e) => handle_store_error(e),
    }
}

/// POST /api/sessions/:session_id/invoke - Invoke a booking tool
pub async fn invoke_tool(
    State(state): State<BookingAppState>,
    Path(session_id): Path<String>,
    Json(request): Json<InvokeToolRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let tool_call = ToolCall::new(&request.tool_name, request.parameters);
    let mut context = ToolExecutionContext::new(
        session_id,
        request.trigger.unwrap_or_else(|| "HTTP invocation".to_string()),
    );
    if let Some(task) = request.task {
        context = context.with_task(task);
    }

    let start = std::time::Instant::now();
    let result = state.executor.execute(tool_call, context).await;
    let duration_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(response) => {
            let invocation_id = uuid::Uuid::new_v4().to_string();
            (
                StatusCode::OK,
                Json(InvokeToolResponse {
                    invocation_id,
                    tool_name: request.tool_name,
                    success: response.is_success(),
                    result: response.data().cloned(),
                    error: response.error_message().map(String::from),
                    error_code: response.error_code().map(String::from),
                    context_updated: response.context_updated(),
                    duration_ms,
                }),
            )
                .into_response()
        }
        Err(e) => handle_execution_error(e),
    }
}

/// GET /api/tools?role=extraction&format=openai - List tool definitions
pub async fn list_tools(
    State(state): State<BookingAppState>,
    Query(query): Query<ListToolsQuery>,
) -> Response {
    let tools = state.executor.available_tools(query.role);
    let count = tools.len();

    let tools_json = match query.format.as_str() {
        "openai" => {
            serde_json::Value::Array(tools.iter().map(|t| t.to_openai_format()).collect())
        }
        "anthropic" => {
            serde_json::Value::Array(tools.iter().map(|t| t.to_anthropic_format()).collect())
        }
        "native" => match serde_json::to_value(&tools) {
            Ok(value) => value,
            Err(e) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new(ErrorCode::InternalError, e.to_string())),
                )
                    .into_response()
            }
        },
        other => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(format!(
                    "Unknown format '{}'. Use openai, anthropic or native.",
                    other
                ))),
            )
                .into_response()
        }
    };

    Json(ListToolsResponse {
        role: query.role,
        format: query.format,
        count,
        tools: tools_json,
    })
    .into_response()
}

/// GET /health - Liveness check
pub async fn health(State(state): State<BookingAppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        active_sessions: state.store.count().await,
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

fn store_status(err: &SessionStoreError) -> StatusCode {
    match err {
        SessionStoreError::NotFound(_) => StatusCode::NOT_FOUND,
        SessionStoreError::CapacityExceeded(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

fn handle_store_error(err: SessionStoreError) -> Response {
    (store_status(&err), Json(ErrorResponse::from(&err))).into_response()
}

fn handle_execution_error(err: ToolExecutionError) -> Response {
    let status = match &err {
        ToolExecutionError::ToolNotFound(_) => StatusCode::NOT_FOUND,
        ToolExecutionError::ToolNotPermitted { .. } => StatusCode::FORBIDDEN,
        ToolExecutionError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
        ToolExecutionError::Session(store_err) => store_status(store_err),
        ToolExecutionError::SystemError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!(error = %err, "Tool execution failed");
    }

    (status, Json(ErrorResponse::from(&err))).into_response()
}
