//! Inbound events delivered by the messaging transport.

use crate::domain::location::Coordinates;

/// Something the user did that the bot reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    /// `/start` command.
    Start,
    /// `/help` command.
    Help,
    /// Device location shared through the keyboard button.
    LocationShared(Coordinates),
    /// Any other text that is not a command.
    Text(String),
}

impl InboundEvent {
    /// Short name for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Help => "help",
            Self::LocationShared(_) => "location",
            Self::Text(_) => "text",
        }
    }
}
