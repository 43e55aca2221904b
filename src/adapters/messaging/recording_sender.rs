//! Recording Message Sender for testing.
//!
//! Stores every reply it is asked to send. Can be told to fail so callers'
//! error paths can be exercised.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::conversation::OutboundMessage;
use crate::domain::foundation::ChatId;
use crate::ports::{MessageSender, TransportError};

/// Message sender that records instead of delivering.
#[derive(Debug, Clone, Default)]
pub struct RecordingMessageSender {
    sent: Arc<Mutex<Vec<(ChatId, OutboundMessage)>>>,
    fail_with: Arc<Mutex<Option<TransportError>>>,
}

impl RecordingMessageSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every send fail with `error`; nothing is recorded.
    pub fn failing(error: TransportError) -> Self {
        let sender = Self::default();
        *sender.fail_with.lock().unwrap() = Some(error);
        sender
    }

    /// All recorded replies in send order.
    pub fn sent(&self) -> Vec<(ChatId, OutboundMessage)> {
        self.sent.lock().unwrap().clone()
    }

    /// Texts sent to one chat, in order.
    pub fn texts_for(&self, chat_id: ChatId) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| *id == chat_id)
            .map(|(_, m)| m.text.clone())
            .collect()
    }
}

#[async_trait]
impl MessageSender for RecordingMessageSender {
    async fn send(&self, chat_id: ChatId, message: &OutboundMessage) -> Result<(), TransportError> {
        if let Some(err) = self.fail_with.lock().unwrap().clone() {
            return Err(err);
        }
        self.sent.lock().unwrap().push((chat_id, message.clone()));
        Ok(())
    }
}
