//! Booking session aggregate.
//!
//! Owns one [`BookingContext`] and keeps the derived [`BookingStage`] in
//! step with it. Sessions are independent; nothing here is global.

use serde::Serialize;

use crate::domain::foundation::{SessionId, StateMachine, Timestamp};

use super::context::BookingContext;
use super::errors::BookingError;
use super::stage::BookingStage;
use super::summary::BookingSummary;

/// One traveller's booking conversation.
#[derive(Debug, Clone, Serialize)]
pub struct BookingSession {
    id: SessionId,
    context: BookingContext,
    stage: BookingStage,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl BookingSession {
    /// Starts a session with an all-unset context.
    pub fn new(id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            context: BookingContext::new(),
            stage: BookingStage::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn context(&self) -> &BookingContext {
        &self.context
    }

    pub fn stage(&self) -> BookingStage {
        self.stage
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Validates and stores one field.
    pub fn update_field(&mut self, path: &str, value: &str) -> Result<String, BookingError> {
        let confirmation = self.context.update(path, value)?;
        self.touch();
        Ok(confirmation)
    }

    /// Records the chosen catalog flight.
    pub fn select_flight(&mut self, option: &str) -> Result<String, BookingError> {
        let confirmation = self.context.select_flight(option)?;
        self.touch();
        Ok(confirmation)
    }

    /// Clears the context back to its initial state.
    pub fn reset(&mut self) -> String {
        let confirmation = self.context.reset();
        self.touch();
        confirmation
    }

    /// Produces the confirmation summary and marks the session summarized.
    ///
    /// # Errors
    ///
    /// Returns `Incomplete` while required fields are pending.
    pub fn summarize(&mut self) -> Result<BookingSummary, BookingError> {
        let summary = BookingSummary::from_context(&self.context)?;
        if self.stage != BookingStage::Summarized {
            self.stage = self.stage.transition_to(BookingStage::Summarized)?;
            tracing::debug!(session_id = %self.id, "Booking summarized");
        }
        Ok(summary)
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
        let derived = BookingStage::derive(&self.context);
        if derived != self.stage {
            tracing::debug!(
                session_id = %self.id,
                from = ?self.stage,
                to = ?derived,
                "Booking stage changed"
            );
            self.stage = derived;
        }
    }
}
