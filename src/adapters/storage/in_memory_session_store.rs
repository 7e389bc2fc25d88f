//! In-Memory Session Store Adapter
//!
//! Holds live booking sessions for the lifetime of the process, up to a
//! fixed number of concurrent sessions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::booking::BookingSession;
use crate::domain::foundation::SessionId;
use crate::ports::{SessionHandle, SessionStore, SessionStoreError};

/// In-memory storage for booking sessions
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionHandle>>>,
    max_sessions: usize,
}

impl InMemorySessionStore {
    /// Create a store that refuses new sessions beyond `max_sessions`
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
        }
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }

    /// Drop every session (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self) -> Result<SessionId, SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.max_sessions {
            tracing::warn!(max_sessions = self.max_sessions, "Session limit reached");
            return Err(SessionStoreError::CapacityExceeded(self.max_sessions));
        }

        let id = SessionId::new();
        sessions.insert(id, Arc::new(Mutex::new(BookingSession::new(id))));
        Ok(id)
    }

    async fn get(&self, id: &SessionId) -> Result<SessionHandle, SessionStoreError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(id)
            .cloned()
            .ok_or(SessionStoreError::NotFound(*id))
    }

    async fn remove(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        self.sessions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(SessionStoreError::NotFound(*id))
    }

    async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::{BookingStage, Field};

    #[tokio::test]
    async fn create_and_get() {
        let store = InMemorySessionStore::new(5);

        let id = store.create().await.unwrap();
        let handle = store.get(&id).await.unwrap();
        let session = handle.lock().await;

        assert_eq!(session.id(), id);
        assert_eq!(session.stage(), BookingStage::Collecting);
    }

    #[tokio::test]
    async fn get_missing_session_fails() {
        let store = InMemorySessionStore::new(5);
        let id = SessionId::new();

        let result = store.get(&id).await;

        assert!(matches!(result, Err(SessionStoreError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = InMemorySessionStore::new(5);
        let a = store.create().await.unwrap();
        let b = store.create().await.unwrap();

        store
            .get(&a)
            .await
            .unwrap()
            .lock()
            .await
            .update_field("travelPlan.goingTo", "Delhi")
            .unwrap();

        let handle = store.get(&b).await.unwrap();
        let other = handle.lock().await;
        assert_eq!(other.context().value(Field::GoingTo), None);
    }

    #[tokio::test]
    async fn refuses_sessions_beyond_capacity() {
        let store = InMemorySessionStore::new(2);
        store.create().await.unwrap();
        store.create().await.unwrap();

        let result = store.create().await;

        assert!(matches!(result, Err(SessionStoreError::CapacityExceeded(2))));
    }

    #[tokio::test]
    async fn remove_frees_capacity() {
        let store = InMemorySessionStore::new(1);
        let id = store.create().await.unwrap();

        store.remove(&id).await.unwrap();

        assert_eq!(store.count().await, 0);
        assert!(store.create().await.is_ok());
        assert!(matches!(
            store.remove(&id).await,
            Err(SessionStoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let store = InMemorySessionStore::new(5);
        store.create().await.unwrap();
        store.create().await.unwrap();

        store.clear().await;

        assert_eq!(store.count().await, 0);
    }
}
