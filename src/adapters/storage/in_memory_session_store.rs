//! In-Memory Session Store Adapter
//!
//! Keeps one `SessionState` per user in a map. State is lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::SessionState;
use crate::domain::foundation::UserId;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage for session state
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<UserId, SessionState>>>,
}

impl InMemorySessionStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, user_id: UserId) -> Result<Option<SessionState>, SessionStoreError> {
        Ok(self.sessions.read().await.get(&user_id).copied())
    }

    async fn save(&self, user_id: UserId, state: SessionState) -> Result<(), SessionStoreError> {
        self.sessions.write().await.insert(user_id, state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_unknown_user_is_none() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.load(UserId::new(1)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_then_load() {
        let store = InMemorySessionStore::new();
        store
            .save(UserId::new(1), SessionState::AwaitingLocation)
            .await
            .unwrap();

        assert_eq!(
            store.load(UserId::new(1)).await.unwrap(),
            Some(SessionState::AwaitingLocation)
        );
    }

    #[tokio::test]
    async fn users_are_independent() {
        let store = InMemorySessionStore::new();
        store
            .save(UserId::new(1), SessionState::AwaitingLocation)
            .await
            .unwrap();

        assert_eq!(store.load(UserId::new(2)).await.unwrap(), None);
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn save_overwrites() {
        let store = InMemorySessionStore::new();
        let user = UserId::new(1);
        store.save(user, SessionState::Start).await.unwrap();
        store.save(user, SessionState::AwaitingLocation).await.unwrap();

        assert_eq!(store.load(user).await.unwrap(), Some(SessionState::AwaitingLocation));
        assert_eq!(store.session_count().await, 1);
    }
}
