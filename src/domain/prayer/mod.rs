//! Prayer domain module.
//!
//! The fixed set of daily prayers and the schedule returned by a timings
//! provider.

mod name;
mod schedule;

pub use name::Prayer;
pub use schedule::PrayerSchedule;
