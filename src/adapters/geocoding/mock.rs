//! Mock Geocoder for testing.
//!
//! Answers forward lookups from a table of known places and reverse lookups
//! with a single configured result. Every call is recorded.
//!
//! # Example
//!
//! ```ignore
//! let geocoder = MockGeocoder::new()
//!     .with_place("Paris, France", GeocodedPlace::new(paris).with_address("Paris, France"));
//!
//! let place = geocoder.forward("paris, france").await?;
//! assert!(place.is_some());
//! assert_eq!(geocoder.forward_calls().len(), 1);
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::location::Coordinates;
use crate::ports::{GeocodedPlace, Geocoder, GeocodingError, ReverseGeocoded};

/// Mock geocoder for testing.
///
/// Queries match known places case-insensitively after trimming. Unknown
/// queries and unconfigured reverse lookups are "no match".
#[derive(Debug, Clone, Default)]
pub struct MockGeocoder {
    places: Arc<Mutex<HashMap<String, GeocodedPlace>>>,
    reverse: Arc<Mutex<Option<ReverseGeocoded>>>,
    /// When set, every call fails with this error.
    error: Arc<Mutex<Option<MockGeocoderError>>>,
    delay: Duration,
    forward_calls: Arc<Mutex<Vec<String>>>,
    reverse_calls: Arc<Mutex<Vec<Coordinates>>>,
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockGeocoderError {
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u64 },
    /// Simulate a non-success HTTP status.
    Status { status: u16 },
    /// Simulate an unparseable body.
    Parse { message: String },
}

impl From<MockGeocoderError> for GeocodingError {
    fn from(err: MockGeocoderError) -> Self {
        match err {
            MockGeocoderError::Network { message } => GeocodingError::network(message),
            MockGeocoderError::Timeout { timeout_secs } => GeocodingError::Timeout { timeout_secs },
            MockGeocoderError::Status { status } => GeocodingError::Status {
                status,
                body: String::new(),
            },
            MockGeocoderError::Parse { message } => GeocodingError::parse(message),
        }
    }
}

impl MockGeocoder {
    /// Creates a mock that knows no places.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a place returned for `query`.
    pub fn with_place(self, query: &str, place: GeocodedPlace) -> Self {
        self.places.lock().unwrap().insert(normalize(query), place);
        self
    }

    /// Sets the result of every reverse lookup.
    pub fn with_reverse(self, reverse: ReverseGeocoded) -> Self {
        *self.reverse.lock().unwrap() = Some(reverse);
        self
    }

    /// Makes every call fail.
    pub fn with_error(self, error: MockGeocoderError) -> Self {
        *self.error.lock().unwrap() = Some(error);
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Queries passed to `forward`, in call order.
    pub fn forward_calls(&self) -> Vec<String> {
        self.forward_calls.lock().unwrap().clone()
    }

    /// Coordinates passed to `reverse`, in call order.
    pub fn reverse_calls(&self) -> Vec<Coordinates> {
        self.reverse_calls.lock().unwrap().clone()
    }

    async fn simulate(&self) -> Result<(), GeocodingError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        let error = self.error.lock().unwrap().clone();
        match error {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

#[async_trait]
impl Geocoder for MockGeocoder {
    async fn forward(&self, query: &str) -> Result<Option<GeocodedPlace>, GeocodingError> {
        self.forward_calls.lock().unwrap().push(query.to_string());
        self.simulate().await?;
        Ok(self.places.lock().unwrap().get(&normalize(query)).cloned())
    }

    async fn reverse(
        &self,
        coordinates: Coordinates,
    ) -> Result<Option<ReverseGeocoded>, GeocodingError> {
        self.reverse_calls.lock().unwrap().push(coordinates);
        self.simulate().await?;
        Ok(self.reverse.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> GeocodedPlace {
        GeocodedPlace::new(Coordinates::new(48.8566, 2.3522).unwrap()).with_address("Paris, France")
    }

    #[tokio::test]
    async fn forward_matches_case_insensitively() {
        let geocoder = MockGeocoder::new().with_place("Paris, France", paris());

        let found = geocoder.forward("  paris, FRANCE ").await.unwrap();

        assert_eq!(found, Some(paris()));
    }

    #[tokio::test]
    async fn unknown_query_is_no_match() {
        let geocoder = MockGeocoder::new().with_place("Paris, France", paris());
        assert_eq!(geocoder.forward("Lyon").await.unwrap(), None);
    }

    #[tokio::test]
    async fn error_applies_to_both_directions() {
        let geocoder = MockGeocoder::new().with_error(MockGeocoderError::Status { status: 429 });
        let c = Coordinates::new(1.0, 1.0).unwrap();

        assert!(matches!(
            geocoder.forward("x").await,
            Err(GeocodingError::Status { status: 429, .. })
        ));
        assert!(geocoder.reverse(c).await.is_err());
    }

    #[tokio::test]
    async fn records_calls_in_order() {
        let geocoder = MockGeocoder::new();
        let c = Coordinates::new(1.0, 2.0).unwrap();

        let _ = geocoder.forward("first").await;
        let _ = geocoder.forward("second").await;
        let _ = geocoder.reverse(c).await;

        assert_eq!(geocoder.forward_calls(), vec!["first", "second"]);
        assert_eq!(geocoder.reverse_calls(), vec![c]);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let geocoder = MockGeocoder::new();
        let clone = geocoder.clone();

        let _ = clone.forward("shared").await;

        assert_eq!(geocoder.forward_calls().len(), 1);
    }
}
