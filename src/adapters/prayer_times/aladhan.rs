//! Aladhan Client - Implementation of PrayerTimesProvider for api.aladhan.com.
//!
//! Issues `GET {base_url}/timings/{unix_timestamp}` with `latitude`,
//! `longitude` and `method` query parameters. The timings object is passed
//! through as-is; only its shape is checked.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::config::PrayerTimesConfig;
use crate::domain::location::Coordinates;
use crate::domain::prayer::PrayerSchedule;
use crate::ports::{PrayerTimesError, PrayerTimesProvider};

/// Aladhan HTTP client.
pub struct AladhanClient {
    base_url: String,
    method: u8,
    timeout: Duration,
    client: Client,
}

impl AladhanClient {
    /// Creates a client from configuration.
    pub fn new(config: &PrayerTimesConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            method: config.method,
            timeout: config.timeout(),
            client,
        }
    }

    /// Builds the timings endpoint URL for a moment in time.
    fn timings_url(&self, at: DateTime<Utc>) -> String {
        format!("{}/timings/{}", self.base_url, at.timestamp())
    }

    fn query(&self, coordinates: Coordinates) -> [(&'static str, String); 3] {
        [
            ("latitude", coordinates.latitude().to_string()),
            ("longitude", coordinates.longitude().to_string()),
            ("method", self.method.to_string()),
        ]
    }
}

#[async_trait]
impl PrayerTimesProvider for AladhanClient {
    async fn timings(
        &self,
        coordinates: Coordinates,
        at: DateTime<Utc>,
    ) -> Result<PrayerSchedule, PrayerTimesError> {
        let url = self.timings_url(at);
        tracing::debug!(%url, method = self.method, "Requesting timings");

        let response = self
            .client
            .get(&url)
            .query(&self.query(coordinates))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PrayerTimesError::Timeout {
                        timeout_secs: self.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    PrayerTimesError::network(format!("Connection failed: {}", e))
                } else {
                    PrayerTimesError::network(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PrayerTimesError::network(e.to_string()))?;

        if !status.is_success() {
            return Err(PrayerTimesError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_timings_response(&body)
    }
}

// ============================================================================
// Aladhan API Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct TimingsResponse {
    data: Option<TimingsData>,
}

#[derive(Debug, Deserialize)]
struct TimingsData {
    timings: Option<BTreeMap<String, String>>,
}

/// Extracts `data.timings` from a response body.
fn parse_timings_response(body: &str) -> Result<PrayerSchedule, PrayerTimesError> {
    let parsed: TimingsResponse =
        serde_json::from_str(body).map_err(|e| PrayerTimesError::malformed(e.to_string()))?;

    let timings = parsed
        .data
        .and_then(|d| d.timings)
        .ok_or_else(|| PrayerTimesError::malformed("missing data.timings"))?;

    PrayerSchedule::from_timings(timings).map_err(|e| PrayerTimesError::malformed(e.to_string()))
}
