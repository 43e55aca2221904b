//! Update Dispatcher - Serializes rounds per user, runs users concurrently.
//!
//! Each user with recent activity has a worker task fed by an unbounded
//! channel. A worker handles its envelopes strictly in arrival order and
//! exits after sitting idle. A replacement worker waits for the exiting one
//! to finish, so a user's rounds never overlap.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, error::SendError, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use super::inbound::Envelope;
use crate::application::{ConversationSession, HandleEventCommand};
use crate::domain::foundation::UserId;
use crate::ports::MessageSender;

struct Worker {
    tx: UnboundedSender<Envelope>,
    handle: JoinHandle<()>,
}

/// Routes envelopes to per-user workers.
pub struct UpdateDispatcher {
    session: Arc<ConversationSession>,
    sender: Arc<dyn MessageSender>,
    idle: Duration,
    workers: HashMap<UserId, Worker>,
}

impl UpdateDispatcher {
    pub fn new(
        session: Arc<ConversationSession>,
        sender: Arc<dyn MessageSender>,
        idle: Duration,
    ) -> Self {
        Self {
            session,
            sender,
            idle,
            workers: HashMap::new(),
        }
    }

    /// Queues an envelope for its user, starting a worker if needed.
    pub fn dispatch(&mut self, envelope: Envelope) {
        let user_id = envelope.user_id;

        let envelope = match self.workers.get(&user_id) {
            Some(worker) => match worker.tx.send(envelope) {
                Ok(()) => return,
                // Worker went idle and closed its queue
                Err(SendError(envelope)) => envelope,
            },
            None => envelope,
        };

        let previous = self.workers.remove(&user_id).map(|w| w.handle);
        let worker = self.spawn(user_id, previous);
        if worker.tx.send(envelope).is_err() {
            tracing::error!(user_id = %user_id, "Fresh worker queue closed");
        }
        self.workers.insert(user_id, worker);
    }

    /// Forgets workers that have exited.
    pub fn reap(&mut self) {
        self.workers.retain(|_, w| !w.handle.is_finished());
    }

    /// Number of workers not yet reaped.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Closes every queue and waits for queued rounds to finish.
    pub async fn shutdown(self) {
        let handles: Vec<_> = self
            .workers
            .into_values()
            .map(|Worker { tx, handle }| {
                drop(tx);
                handle
            })
            .collect();

        for handle in handles {
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "Worker task failed");
            }
        }
    }

    fn spawn(&self, user_id: UserId, previous: Option<JoinHandle<()>>) -> Worker {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_worker(
            self.session.clone(),
            self.sender.clone(),
            rx,
            self.idle,
            previous,
        ));
        tracing::debug!(user_id = %user_id, "Worker started");
        Worker { tx, handle }
    }
}

async fn run_worker(
    session: Arc<ConversationSession>,
    sender: Arc<dyn MessageSender>,
    mut rx: UnboundedReceiver<Envelope>,
    idle: Duration,
    previous: Option<JoinHandle<()>>,
) {
    if let Some(previous) = previous {
        if let Err(e) = previous.await {
            tracing::error!(error = %e, "Previous worker task failed");
        }
    }

    loop {
        match tokio::time::timeout(idle, rx.recv()).await {
            Ok(Some(envelope)) => process(&session, sender.as_ref(), envelope).await,
            Ok(None) => break,
            Err(_) => {
                // Sends after close fail and go to a new worker
                rx.close();
                while let Ok(envelope) = rx.try_recv() {
                    process(&session, sender.as_ref(), envelope).await;
                }
                tracing::debug!("Worker idle, exiting");
                break;
            }
        }
    }
}

async fn process(session: &ConversationSession, sender: &dyn MessageSender, envelope: Envelope) {
    let Envelope {
        user_id,
        chat_id,
        event,
    } = envelope;

    let result = match session.handle(HandleEventCommand::new(user_id, event)).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(user_id = %user_id, error = %e, "Round failed");
            return;
        }
    };

    for reply in &result.replies {
        if let Err(e) = sender.send(chat_id, reply).await {
            tracing::warn!(user_id = %user_id, error = %e, "Failed to deliver reply");
            break;
        }
    }
}
