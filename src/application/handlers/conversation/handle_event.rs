//! ConversationSession - Runs one conversation round per inbound event.
//!
//! The session for a user is created by `/start` and then stays in
//! `AwaitingLocation` forever. Every location or text event is a round:
//! resolve, fetch, report, then prompt for the next location. Failures inside
//! a round become user-facing messages; only session storage errors escape.

use std::sync::Arc;

use thiserror::Error;
use tracing::Instrument;
use uuid::Uuid;

use crate::application::{LocationResolver, PrayerTimeClient};
use crate::domain::conversation::{
    InboundEvent, MessageFormatter, OutboundMessage, ReplyMarkup, RoundOutcome, SessionState,
};
use crate::domain::foundation::{StateMachine, UserId, ValidationError};
use crate::domain::location::LocationQuery;
use crate::ports::{SessionStore, SessionStoreError};

/// Command to handle one inbound event for a user.
#[derive(Debug, Clone)]
pub struct HandleEventCommand {
    pub user_id: UserId,
    pub event: InboundEvent,
}

impl HandleEventCommand {
    pub fn new(user_id: UserId, event: InboundEvent) -> Self {
        Self { user_id, event }
    }
}

/// Result of handling an event.
#[derive(Debug, Clone)]
pub struct HandleEventResult {
    /// Replies to send, in order.
    pub replies: Vec<OutboundMessage>,
    /// How the round ended.
    pub outcome: RoundOutcome,
    /// Session state after the round, `None` if the user has no session.
    pub state: Option<SessionState>,
}

/// Errors that can occur while handling an event.
#[derive(Debug, Clone, Error)]
pub enum ConversationError {
    /// Session state could not be loaded or saved.
    #[error("Session storage error: {0}")]
    Storage(#[from] SessionStoreError),

    /// The state machine rejected a transition.
    #[error("Invalid session transition: {0}")]
    InvalidTransition(#[from] ValidationError),
}

/// Handler driving per-user sessions.
pub struct ConversationSession {
    resolver: Arc<LocationResolver>,
    prayer_times: Arc<PrayerTimeClient>,
    sessions: Arc<dyn SessionStore>,
}

impl ConversationSession {
    pub fn new(
        resolver: Arc<LocationResolver>,
        prayer_times: Arc<PrayerTimeClient>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            resolver,
            prayer_times,
            sessions,
        }
    }

    pub async fn handle(
        &self,
        cmd: HandleEventCommand,
    ) -> Result<HandleEventResult, ConversationError> {
        let span = tracing::info_span!(
            "round",
            user_id = %cmd.user_id,
            round_id = %Uuid::new_v4(),
            event = cmd.event.kind(),
        );

        async move {
            let result = self.dispatch(cmd).await?;
            tracing::info!(outcome = result.outcome.kind(), "Round complete");
            Ok(result)
        }
        .instrument(span)
        .await
    }

    async fn dispatch(&self, cmd: HandleEventCommand) -> Result<HandleEventResult, ConversationError> {
        let current = self.sessions.load(cmd.user_id).await?;

        match cmd.event {
            InboundEvent::Help => Ok(HandleEventResult {
                replies: vec![OutboundMessage::text(MessageFormatter::help())],
                outcome: RoundOutcome::HelpShown,
                state: current,
            }),
            InboundEvent::Start => self.start(cmd.user_id, current).await,
            InboundEvent::LocationShared(coordinates) => {
                self.location_round(cmd.user_id, current, Some(LocationQuery::coordinates(coordinates)))
                    .await
            }
            InboundEvent::Text(text) => {
                self.location_round(cmd.user_id, current, LocationQuery::text(&text))
                    .await
            }
        }
    }

    async fn start(
        &self,
        user_id: UserId,
        current: Option<SessionState>,
    ) -> Result<HandleEventResult, ConversationError> {
        let next = current
            .unwrap_or_default()
            .transition_to(SessionState::AwaitingLocation)?;
        self.sessions.save(user_id, next).await?;

        Ok(HandleEventResult {
            replies: vec![OutboundMessage::text(MessageFormatter::welcome())
                .with_markup(ReplyMarkup::RequestLocation)],
            outcome: RoundOutcome::Welcomed,
            state: Some(next),
        })
    }

    /// `query` is `None` when the text input was blank.
    async fn location_round(
        &self,
        user_id: UserId,
        current: Option<SessionState>,
        query: Option<LocationQuery>,
    ) -> Result<HandleEventResult, ConversationError> {
        let state = match current {
            Some(state) if state.accepts_location() => state,
            other => {
                tracing::debug!("Location input outside an active session");
                return Ok(HandleEventResult {
                    replies: Vec::new(),
                    outcome: RoundOutcome::Ignored,
                    state: other,
                });
            }
        };

        let Some(query) = query else {
            return Ok(HandleEventResult {
                replies: vec![OutboundMessage::text(MessageFormatter::empty_input())],
                outcome: RoundOutcome::InputInvalid,
                state: Some(state),
            });
        };

        let (reply, outcome) = self.resolve_and_report(&query).await;
        let next = state.transition_to(SessionState::AwaitingLocation)?;
        self.sessions.save(user_id, next).await?;

        Ok(HandleEventResult {
            replies: vec![
                reply,
                OutboundMessage::text(MessageFormatter::location_prompt())
                    .with_markup(ReplyMarkup::RequestLocation),
            ],
            outcome,
            state: Some(next),
        })
    }

    async fn resolve_and_report(&self, query: &LocationQuery) -> (OutboundMessage, RoundOutcome) {
        tracing::debug!(query = query.kind(), "Resolving location");

        let location = match self.resolver.resolve(query).await {
            Ok(location) => location,
            Err(_) => {
                return (
                    OutboundMessage::text(MessageFormatter::not_found()),
                    RoundOutcome::LocationNotFound,
                )
            }
        };

        match self.prayer_times.fetch(location.coordinates()).await {
            Ok(schedule) => (
                OutboundMessage::text(MessageFormatter::report(location.display_address(), &schedule))
                    .with_markup(ReplyMarkup::RemoveKeyboard),
                RoundOutcome::Reported(location),
            ),
            Err(_) => (
                OutboundMessage::text(MessageFormatter::unavailable()),
                RoundOutcome::ScheduleUnavailable(location),
            ),
        }
    }
}
