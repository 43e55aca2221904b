//! Messaging adapters that are not tied to a chat platform.
//!
//! - `RecordingMessageSender` - Captures replies instead of sending them

mod recording_sender;

pub use recording_sender::RecordingMessageSender;
