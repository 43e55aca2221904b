//! Application layer - Services and command handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;
mod location_resolver;
mod prayer_time_client;

pub use handlers::{
    ConversationError, ConversationSession, HandleEventCommand, HandleEventResult,
};
pub use location_resolver::{LocationNotFound, LocationResolver};
pub use prayer_time_client::{PrayerTimeClient, ScheduleUnavailable};
