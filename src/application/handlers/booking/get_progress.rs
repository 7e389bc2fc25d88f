//! Query handlers for reading a session without mutating it.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::booking::{BookingContext, BookingStage, Field, NextNode};
use crate::domain::foundation::{SessionId, Timestamp};
use crate::ports::{SessionStore, SessionStoreError};

/// Query for a session's progress or context.
#[derive(Debug, Clone)]
pub struct GetProgressQuery {
    pub session_id: SessionId,
}

/// How far a booking has got.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingProgress {
    pub session_id: SessionId,
    pub stage: BookingStage,
    pub accommodation_required: bool,
    pub pending_fields: Vec<Field>,
    pub filled_fields: Vec<Field>,
    pub next_question: String,
    pub next_node: NextNode,
    pub complete: bool,
}

/// Read-only copy of a session's context.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextView {
    pub session_id: SessionId,
    pub stage: BookingStage,
    pub context: BookingContext,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Handler for progress and context queries.
pub struct GetProgressHandler {
    store: Arc<dyn SessionStore>,
}

impl GetProgressHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetProgressQuery,
    ) -> Result<BookingProgress, SessionStoreError> {
        let handle = self.store.get(&query.session_id).await?;
        let session = handle.lock().await;
        let context = session.context();

        Ok(BookingProgress {
            session_id: session.id(),
            stage: session.stage(),
            accommodation_required: context.accommodation_required(),
            pending_fields: context.pending_fields(),
            filled_fields: context.filled_fields(),
            next_question: context.next_question(),
            next_node: context.next_node(),
            complete: context.is_complete(),
        })
    }

    pub async fn context(
        &self,
        query: GetProgressQuery,
    ) -> Result<ContextView, SessionStoreError> {
        let handle = self.store.get(&query.session_id).await?;
        let session = handle.lock().await;

        Ok(ContextView {
            session_id: session.id(),
            stage: session.stage(),
            context: session.context().snapshot(),
            created_at: session.created_at(),
            updated_at: session.updated_at(),
        })
    }
}
