//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Geocoder` - Forward and reverse geocoding
//! - `PrayerTimesProvider` - Daily prayer timings for a position
//! - `MessageSender` - Delivery of replies to a chat
//! - `SessionStore` - Per-user conversation state

mod geocoder;
mod message_sender;
mod prayer_times_provider;
mod session_store;

pub use geocoder::{GeocodedPlace, Geocoder, GeocodingError, ReverseGeocoded};
pub use message_sender::{MessageSender, TransportError};
pub use prayer_times_provider::{PrayerTimesError, PrayerTimesProvider};
pub use session_store::{SessionStore, SessionStoreError};
