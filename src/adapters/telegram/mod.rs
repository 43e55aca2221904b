//! Telegram transport.
//!
//! - `TelegramClient` - Bot API calls, implements `MessageSender`
//! - `TelegramPoller` - `getUpdates` loop
//! - `UpdateDispatcher` - Per-user ordering of conversation rounds

mod client;
mod dispatcher;
mod inbound;
mod poller;
mod types;

pub use client::TelegramClient;
pub use dispatcher::UpdateDispatcher;
pub use inbound::{to_envelope, Envelope};
pub use poller::{TelegramPoller, UpdateSource};
pub use types::{KeyboardMarkup, Update, SHARE_LOCATION_LABEL};
