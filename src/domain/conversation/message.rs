//! Outbound messages handed to the messaging transport.

use serde::{Deserialize, Serialize};

/// Keyboard directive attached to a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyMarkup {
    /// Leave the client keyboard as it is.
    #[default]
    None,
    /// Offer a one-time "Share Location" button.
    RequestLocation,
    /// Hide any custom keyboard.
    RemoveKeyboard,
}

/// A text reply to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub text: String,
    #[serde(default)]
    pub markup: ReplyMarkup,
}

impl OutboundMessage {
    /// Plain message without keyboard changes.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: ReplyMarkup::None,
        }
    }

    /// Sets the keyboard directive.
    pub fn with_markup(mut self, markup: ReplyMarkup) -> Self {
        self.markup = markup;
        self
    }
}
