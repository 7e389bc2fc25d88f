//! Axum router configuration for booking endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    end_session, get_context, get_progress, health, invoke_tool, list_tools, start_session,
    BookingAppState,
};

/// Create the booking API router.
///
/// # Routes
///
/// ## Sessions
/// - `POST /sessions` - Open a session
/// - `DELETE /sessions/:session_id` - End a session
/// - `GET /sessions/:session_id/context` - Context snapshot
/// - `GET /sessions/:session_id/progress` - Pending fields and next question
///
/// ## Tools
/// - `POST /sessions/:session_id/invoke` - Invoke a tool
/// - `GET /tools` - List tool definitions (query: role, format)
pub fn booking_routes() -> Router<BookingAppState> {
    Router::new()
        .route("/sessions", post(start_session))
        .route("/sessions/:session_id", delete(end_session))
        .route("/sessions/:session_id/context", get(get_context))
        .route("/sessions/:session_id/progress", get(get_progress))
        .route("/sessions/:session_id/invoke", post(invoke_tool))
        .route("/tools", get(list_tools))
}

/// Create the complete application router: the booking API under `/api`
/// plus `/health`.
///
/// # Example
///
/// ```ignore
/// let app = booking_router().with_state(BookingAppState::new(store, executor));
/// ```
pub fn booking_router() -> Router<BookingAppState> {
    Router::new()
        .nest("/api", booking_routes())
        .route("/health", get(health))
}
