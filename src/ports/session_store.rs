//! Session Store Port - Interface for holding live booking sessions.
//!
//! Each session owns its own [`BookingSession`] behind its own lock, so
//! calls against one session are serialized while other sessions proceed
//! independently. Storage lasts for the lifetime of the process.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::booking::BookingSession;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};

/// Exclusive handle to one live session.
pub type SessionHandle = Arc<Mutex<BookingSession>>;

/// Errors that can occur during session store operations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Session limit reached ({0} active sessions)")]
    CapacityExceeded(usize),
}

impl From<SessionStoreError> for DomainError {
    fn from(err: SessionStoreError) -> Self {
        let code = match err {
            SessionStoreError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionStoreError::CapacityExceeded(_) => ErrorCode::SessionLimitReached,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Port for creating, looking up and ending booking sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Starts a fresh session with an all-unset context.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` when the store is full.
    async fn create(&self) -> Result<SessionId, SessionStoreError>;

    /// Returns the handle for a live session.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such session exists.
    async fn get(&self, id: &SessionId) -> Result<SessionHandle, SessionStoreError>;

    /// Ends a session and drops its context.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such session exists.
    async fn remove(&self, id: &SessionId) -> Result<(), SessionStoreError>;

    /// Number of live sessions.
    async fn count(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_contains_id() {
        let id = SessionId::new();
        let err = SessionStoreError::NotFound(id);
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn converts_to_domain_error_codes() {
        let err: DomainError = SessionStoreError::CapacityExceeded(10).into();
        assert_eq!(err.code, ErrorCode::SessionLimitReached);

        let err: DomainError = SessionStoreError::NotFound(SessionId::new()).into();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[test]
    fn session_store_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SessionStore>();
    }
}
