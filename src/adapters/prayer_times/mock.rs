//! Mock Prayer Times Provider for testing.
//!
//! Responses are consumed in order; once the queue is empty a fixed default
//! schedule is returned. Every call is recorded for verification.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::location::Coordinates;
use crate::domain::prayer::PrayerSchedule;
use crate::ports::{PrayerTimesError, PrayerTimesProvider};

/// Mock prayer times provider for testing.
#[derive(Debug, Clone, Default)]
pub struct MockPrayerTimesProvider {
    responses: Arc<Mutex<VecDeque<MockPrayerTimesResponse>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<(Coordinates, DateTime<Utc>)>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockPrayerTimesResponse {
    Schedule(PrayerSchedule),
    Error(MockPrayerTimesError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockPrayerTimesError {
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u64 },
    /// Simulate a non-success HTTP status.
    Status { status: u16 },
    /// Simulate a body without the expected shape.
    Malformed { reason: String },
}

impl From<MockPrayerTimesError> for PrayerTimesError {
    fn from(err: MockPrayerTimesError) -> Self {
        match err {
            MockPrayerTimesError::Network { message } => PrayerTimesError::network(message),
            MockPrayerTimesError::Timeout { timeout_secs } => {
                PrayerTimesError::Timeout { timeout_secs }
            }
            MockPrayerTimesError::Status { status } => PrayerTimesError::Status {
                status,
                body: String::new(),
            },
            MockPrayerTimesError::Malformed { reason } => PrayerTimesError::malformed(reason),
        }
    }
}

/// Timings returned when no response is queued.
const DEFAULT_TIMINGS: [(&str, &str); 7] = [
    ("Fajr", "05:00"),
    ("Sunrise", "06:30"),
    ("Dhuhr", "12:15"),
    ("Asr", "15:45"),
    ("Maghrib", "18:20"),
    ("Isha", "19:50"),
    ("Imsak", "04:50"),
];

impl MockPrayerTimesProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// The schedule returned when the queue is empty.
    pub fn default_schedule() -> PrayerSchedule {
        Self::schedule_from(&[])
    }

    /// Default timings with the given entries inserted or replaced.
    pub fn schedule_from(overrides: &[(&str, &str)]) -> PrayerSchedule {
        let mut timings: BTreeMap<String, String> = DEFAULT_TIMINGS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (k, v) in overrides {
            timings.insert(k.to_string(), v.to_string());
        }
        // DEFAULT_TIMINGS covers every canonical prayer
        PrayerSchedule::from_timings(timings).expect("default timings are complete")
    }

    /// Adds a successful response to the queue.
    pub fn with_schedule(self, schedule: PrayerSchedule) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockPrayerTimesResponse::Schedule(schedule));
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockPrayerTimesError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockPrayerTimesResponse::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<(Coordinates, DateTime<Utc>)> {
        self.calls.lock().unwrap().clone()
    }

    fn next_response(&self) -> MockPrayerTimesResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockPrayerTimesResponse::Schedule(Self::default_schedule()))
    }
}

#[async_trait]
impl PrayerTimesProvider for MockPrayerTimesProvider {
    async fn timings(
        &self,
        coordinates: Coordinates,
        at: DateTime<Utc>,
    ) -> Result<PrayerSchedule, PrayerTimesError> {
        self.calls.lock().unwrap().push((coordinates, at));

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockPrayerTimesResponse::Schedule(schedule) => Ok(schedule),
            MockPrayerTimesResponse::Error(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prayer::Prayer;

    fn coords() -> Coordinates {
        Coordinates::new(1.0, 2.0).unwrap()
    }

    #[tokio::test]
    async fn returns_default_schedule_when_queue_empty() {
        let provider = MockPrayerTimesProvider::new();
        let schedule = provider.timings(coords(), Utc::now()).await.unwrap();
        assert_eq!(schedule, MockPrayerTimesProvider::default_schedule());
    }

    #[tokio::test]
    async fn consumes_responses_in_order() {
        let provider = MockPrayerTimesProvider::new()
            .with_error(MockPrayerTimesError::Timeout { timeout_secs: 5 })
            .with_schedule(MockPrayerTimesProvider::schedule_from(&[("Asr", "16:00")]));

        let first = provider.timings(coords(), Utc::now()).await;
        let second = provider.timings(coords(), Utc::now()).await.unwrap();

        assert_eq!(first, Err(PrayerTimesError::Timeout { timeout_secs: 5 }));
        assert_eq!(second.time_for(Prayer::Asr), "16:00");
    }

    #[tokio::test]
    async fn records_every_call() {
        let provider = MockPrayerTimesProvider::new();
        let _ = provider.timings(coords(), Utc::now()).await;
        let _ = provider.timings(coords(), Utc::now()).await;
        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.get_calls()[1].0, coords());
    }
}
