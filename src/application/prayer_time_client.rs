//! PrayerTimeClient - Fetches today's schedule for a resolved position.
//!
//! Every call goes to the provider; there is no cache and no retry. Any
//! provider failure becomes `ScheduleUnavailable`.

use chrono::Utc;
use std::sync::Arc;

use crate::domain::location::Coordinates;
use crate::domain::prayer::PrayerSchedule;
use crate::ports::PrayerTimesProvider;

/// No schedule could be obtained for this round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("prayer schedule unavailable")]
pub struct ScheduleUnavailable;

/// Service fetching schedules through a [`PrayerTimesProvider`].
pub struct PrayerTimeClient {
    provider: Arc<dyn PrayerTimesProvider>,
}

impl PrayerTimeClient {
    pub fn new(provider: Arc<dyn PrayerTimesProvider>) -> Self {
        Self { provider }
    }

    /// Fetches the schedule for the current day at `coordinates`.
    pub async fn fetch(&self, coordinates: Coordinates) -> Result<PrayerSchedule, ScheduleUnavailable> {
        tracing::info!(%coordinates, "Fetching prayer times");

        self.provider
            .timings(coordinates, Utc::now())
            .await
            .map_err(|e| {
                tracing::error!(%coordinates, "Error fetching prayer times: {}", e);
                ScheduleUnavailable
            })
    }
}
