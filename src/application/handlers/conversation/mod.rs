//! Conversation command handlers.

mod handle_event;

pub use handle_event::{
    ConversationError, ConversationSession, HandleEventCommand, HandleEventResult,
};
