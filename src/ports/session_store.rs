//! Session Store Port - Interface for per-user conversation state.
//!
//! Entries are created on `/start` and never removed by the bot itself.

use async_trait::async_trait;

use crate::domain::conversation::SessionState;
use crate::domain::foundation::UserId;

/// Errors that can occur during session store operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session backend unavailable: {0}")]
    Unavailable(String),
}

/// Port for loading and saving session state
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the state for a user, `None` if the user never started a session
    async fn load(&self, user_id: UserId) -> Result<Option<SessionState>, SessionStoreError>;

    /// Save the state for a user, replacing any previous value
    async fn save(&self, user_id: UserId, state: SessionState) -> Result<(), SessionStoreError>;
}
