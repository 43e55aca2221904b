//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `geocoding` - Nominatim and mock geocoders
//! - `prayer_times` - Aladhan and mock timing providers
//! - `storage` - Session state storage
//! - `messaging` - Transport-independent message senders
//! - `telegram` - Bot API client, poller and per-user dispatcher

pub mod geocoding;
pub mod messaging;
pub mod prayer_times;
pub mod storage;
pub mod telegram;

pub use geocoding::{MockGeocoder, MockGeocoderError, NominatimGeocoder};
pub use messaging::RecordingMessageSender;
pub use prayer_times::{AladhanClient, MockPrayerTimesError, MockPrayerTimesProvider};
pub use storage::InMemorySessionStore;
pub use telegram::{TelegramClient, TelegramPoller, UpdateDispatcher};
