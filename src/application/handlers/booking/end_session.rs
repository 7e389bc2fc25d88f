//! EndSessionHandler - Command handler for closing a booking session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

/// Command to end a session and discard its context.
#[derive(Debug, Clone)]
pub struct EndSessionCommand {
    pub session_id: SessionId,
}

/// Handler for ending sessions.
pub struct EndSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl EndSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: EndSessionCommand) -> Result<(), SessionStoreError> {
        self.store.remove(&cmd.session_id).await?;
        tracing::info!(session_id = %cmd.session_id, "Booking session ended");
        Ok(())
    }
}
