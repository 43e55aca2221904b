//! Translation from Bot API updates to conversation events.

use super::types::{Message, Update};
use crate::domain::conversation::InboundEvent;
use crate::domain::foundation::{ChatId, UserId};
use crate::domain::location::Coordinates;

/// An event addressed to one user's session.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub user_id: UserId,
    pub chat_id: ChatId,
    pub event: InboundEvent,
}

/// Maps an update to an event, or `None` when the bot ignores it.
///
/// Ignored: non-message updates, messages without a human sender, unknown
/// commands, media other than locations, and out-of-range coordinates.
pub fn to_envelope(update: &Update) -> Option<Envelope> {
    let message = update.message.as_ref()?;
    let from = message.from.as_ref().filter(|u| !u.is_bot)?;
    let event = to_event(message)?;

    Some(Envelope {
        user_id: UserId::new(from.id),
        chat_id: ChatId::new(message.chat.id),
        event,
    })
}

fn to_event(message: &Message) -> Option<InboundEvent> {
    if let Some(location) = message.location {
        return match Coordinates::new(location.latitude, location.longitude) {
            Ok(coordinates) => Some(InboundEvent::LocationShared(coordinates)),
            Err(e) => {
                tracing::warn!(error = %e, "Dropping shared location");
                None
            }
        };
    }

    let text = message.text.as_deref()?;
    if text.starts_with('/') {
        return parse_command(text);
    }
    Some(InboundEvent::Text(text.to_string()))
}

/// `/start`, `/help`, optionally addressed as `/start@SomeBot` and followed
/// by arguments.
fn parse_command(text: &str) -> Option<InboundEvent> {
    let token = text.split_whitespace().next()?;
    let name = token.trim_start_matches('/');
    let name = name.split('@').next().unwrap_or(name);

    match name {
        "start" => Some(InboundEvent::Start),
        "help" => Some(InboundEvent::Help),
        _ => None,
    }
}
