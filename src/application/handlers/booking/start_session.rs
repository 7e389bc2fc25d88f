//! StartSessionHandler - Command handler for opening a booking session.

use std::sync::Arc;

use crate::domain::booking::BookingStage;
use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

/// Command to open a new booking session.
#[derive(Debug, Clone, Default)]
pub struct StartSessionCommand {
    /// What started the session (for logging)
    pub source: Option<String>,
}

/// Result of opening a session.
#[derive(Debug, Clone)]
pub struct StartSessionResult {
    pub session_id: SessionId,
    pub stage: BookingStage,
    /// The first question to put to the traveller.
    pub next_question: String,
}

/// Handler for opening sessions.
pub struct StartSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl StartSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: StartSessionCommand,
    ) -> Result<StartSessionResult, SessionStoreError> {
        let session_id = self.store.create().await?;
        let handle = self.store.get(&session_id).await?;
        let session = handle.lock().await;

        tracing::info!(
            session_id = %session_id,
            source = cmd.source.as_deref().unwrap_or("unknown"),
            "Booking session started"
        );

        Ok(StartSessionResult {
            session_id,
            stage: session.stage(),
            next_question: session.context().next_question(),
        })
    }
}
