//! Conversation domain module.
//!
//! The per-user session state machine, the events that drive it, the replies
//! it produces, and the text templates those replies are rendered from.

mod event;
mod formatter;
mod message;
mod outcome;
mod state;

pub use event::InboundEvent;
pub use formatter::MessageFormatter;
pub use message::{OutboundMessage, ReplyMarkup};
pub use outcome::RoundOutcome;
pub use state::SessionState;
