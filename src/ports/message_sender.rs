//! Message Sender Port - Interface for delivering replies.

use async_trait::async_trait;

use crate::domain::conversation::OutboundMessage;
use crate::domain::foundation::ChatId;

/// Port for the chat transport's send side.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Sends one reply to a chat.
    async fn send(&self, chat_id: ChatId, message: &OutboundMessage) -> Result<(), TransportError>;
}

/// Errors from the messaging transport.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Bot token rejected.
    #[error("authentication failed")]
    Unauthorized,

    /// Transport rejected the request.
    #[error("api error {code}: {description}")]
    Api { code: u16, description: String },

    /// Failed to parse transport response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl TransportError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }
}
