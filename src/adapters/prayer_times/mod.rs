//! Prayer Times Adapters.
//!
//! - `AladhanClient` - Aladhan timings API
//! - `MockPrayerTimesProvider` - Configurable mock for testing

mod aladhan;
mod mock;

pub use aladhan::AladhanClient;
pub use mock::{MockPrayerTimesError, MockPrayerTimesProvider, MockPrayerTimesResponse};
