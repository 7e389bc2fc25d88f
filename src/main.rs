//! Travel Desk HTTP server.
//!
//! ```bash
//! TRAVEL_DESK__SERVER__PORT=8080 cargo run
//!
//! curl -X POST http://localhost:8080/api/sessions
//! curl -X POST http://localhost:8080/api/sessions/{id}/invoke \
//!   -H "Content-Type: application/json" \
//!   -d '{"tool_name": "update_field",
//!        "parameters": {"field": "travelPlan.goingTo", "value": "Mumbai"}}'
//! ```

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use travel_desk::adapters::{booking_router, BookingAppState, InMemorySessionStore};
use travel_desk::application::BookingToolExecutor;
use travel_desk::config::{AppConfig, LogFormat, ServerConfig};
use travel_desk::ports::SessionStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let store: Arc<dyn SessionStore> =
        Arc::new(InMemorySessionStore::new(config.sessions.max_sessions));
    let executor = Arc::new(BookingToolExecutor::new(store.clone()));
    let state = BookingAppState::new(store, executor);

    let app = booking_router()
        .with_state(state)
        .layer(cors_layer(&config.server))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        max_sessions = config.sessions.max_sessions,
        "Travel desk listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match server.log_format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
