//! Long-poll loop feeding the dispatcher.

use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use super::client::TelegramClient;
use super::dispatcher::UpdateDispatcher;
use super::inbound::to_envelope;
use super::types::Update;
use crate::ports::TransportError;

/// Source of update batches.
#[async_trait]
pub trait UpdateSource: Send + Sync {
    /// Returns updates with `update_id >= offset`, waiting for some to arrive.
    async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, TransportError>;
}

#[async_trait]
impl UpdateSource for TelegramClient {
    async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, TransportError> {
        TelegramClient::get_updates(self, offset).await
    }
}

/// Polls for updates until shutdown or a rejected token.
pub struct TelegramPoller {
    source: Arc<dyn UpdateSource>,
    dispatcher: UpdateDispatcher,
    retry_delay: Duration,
    offset: Option<i64>,
}

impl TelegramPoller {
    pub fn new(
        source: Arc<dyn UpdateSource>,
        dispatcher: UpdateDispatcher,
        retry_delay: Duration,
    ) -> Self {
        Self {
            source,
            dispatcher,
            retry_delay,
            offset: None,
        }
    }

    /// Runs until `shutdown` resolves, then drains the dispatcher.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Unauthorized` when the token is rejected.
    /// Other transport errors are retried after the configured delay.
    pub async fn run<F>(mut self, shutdown: F) -> Result<(), TransportError>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        tracing::info!("Polling for updates");

        let outcome = loop {
            let polled = tokio::select! {
                biased;
                _ = &mut shutdown => break Ok(()),
                polled = self.source.get_updates(self.offset) => polled,
            };

            match polled {
                Ok(updates) => self.handle_batch(updates),
                Err(TransportError::Unauthorized) => {
                    tracing::error!("Bot token rejected");
                    break Err(TransportError::Unauthorized);
                }
                Err(e) => {
                    tracing::warn!(error = %e, retry_in_secs = self.retry_delay.as_secs(), "Polling failed");
                    tokio::select! {
                        biased;
                        _ = &mut shutdown => break Ok(()),
                        _ = tokio::time::sleep(self.retry_delay) => {}
                    }
                }
            }
        };

        tracing::info!("Stopping, waiting for in-flight rounds");
        self.dispatcher.shutdown().await;
        outcome
    }

    fn handle_batch(&mut self, updates: Vec<Update>) {
        for update in updates {
            self.offset = next_offset(self.offset, update.update_id);
            match to_envelope(&update) {
                Some(envelope) => self.dispatcher.dispatch(envelope),
                None => tracing::debug!(update_id = update.update_id, "Ignoring update"),
            }
        }
        self.dispatcher.reap();
    }
}

/// Offset that confirms `update_id` and everything before it.
fn next_offset(current: Option<i64>, update_id: i64) -> Option<i64> {
    let candidate = update_id + 1;
    Some(current.map_or(candidate, |c| c.max(candidate)))
}
