//! Prayer Times Provider Port - Interface for daily timings services.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::location::Coordinates;
use crate::domain::prayer::PrayerSchedule;

/// Port for prayer timings services (Aladhan, mocks).
#[async_trait]
pub trait PrayerTimesProvider: Send + Sync {
    /// Fetches the timings for the day containing `at` at the given position.
    async fn timings(
        &self,
        coordinates: Coordinates,
        at: DateTime<Utc>,
    ) -> Result<PrayerSchedule, PrayerTimesError>;
}

/// Errors from prayer timings providers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PrayerTimesError {
    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Provider answered with a non-success status.
    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Body did not have the expected shape.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

impl PrayerTimesError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPayload(message.into())
    }
}
