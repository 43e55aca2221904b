//! Nominatim Geocoder - Implementation of Geocoder for OpenStreetMap Nominatim.
//!
//! Uses `/search` for forward lookups and `/reverse` for reverse lookups, both
//! with `format=jsonv2`. Nominatim requires an identifying User-Agent.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use std::time::Duration;

use crate::config::GeocodingConfig;
use crate::domain::location::Coordinates;
use crate::ports::{GeocodedPlace, Geocoder, GeocodingError, ReverseGeocoded};

/// Nominatim HTTP client.
pub struct NominatimGeocoder {
    base_url: String,
    timeout: Duration,
    client: Client,
}

impl NominatimGeocoder {
    /// Creates a geocoder from configuration.
    pub fn new(config: &GeocodingConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout(),
            client,
        }
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }

    fn reverse_url(&self) -> String {
        format!("{}/reverse", self.base_url)
    }

    fn map_send_error(&self, e: reqwest::Error) -> GeocodingError {
        if e.is_timeout() {
            GeocodingError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else if e.is_connect() {
            GeocodingError::network(format!("Connection failed: {}", e))
        } else {
            GeocodingError::network(e.to_string())
        }
    }

    /// Reads the body, turning non-success statuses into errors.
    async fn body(&self, response: Response) -> Result<String, GeocodingError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::network(e.to_string()))?;

        if !status.is_success() {
            return Err(GeocodingError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn forward(&self, query: &str) -> Result<Option<GeocodedPlace>, GeocodingError> {
        tracing::debug!(url = %self.search_url(), "Forward geocoding");

        let response = self
            .client
            .get(self.search_url())
            .query(&[("q", query), ("format", "jsonv2"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        parse_search_response(&self.body(response).await?)
    }

    async fn reverse(
        &self,
        coordinates: Coordinates,
    ) -> Result<Option<ReverseGeocoded>, GeocodingError> {
        tracing::debug!(url = %self.reverse_url(), %coordinates, "Reverse geocoding");

        let response = self
            .client
            .get(self.reverse_url())
            .query(&[
                ("lat", coordinates.latitude().to_string()),
                ("lon", coordinates.longitude().to_string()),
                ("format", "jsonv2".to_string()),
                ("addressdetails", "1".to_string()),
            ])
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        parse_reverse_response(&self.body(response).await?)
    }
}

// ============================================================================
// Nominatim API Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReverseBody {
    display_name: Option<String>,
    address: Option<ReverseAddress>,
    /// Present instead of an address when nothing is known
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReverseAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
}

/// Parses a `/search` body. An empty array is no match.
fn parse_search_response(body: &str) -> Result<Option<GeocodedPlace>, GeocodingError> {
    let hits: Vec<SearchHit> =
        serde_json::from_str(body).map_err(|e| GeocodingError::parse(e.to_string()))?;

    let Some(hit) = hits.into_iter().next() else {
        return Ok(None);
    };

    let coordinates = Coordinates::parse(&hit.lat, &hit.lon)
        .map_err(|e| GeocodingError::parse(e.to_string()))?;

    Ok(Some(GeocodedPlace {
        coordinates,
        address: hit.display_name,
    }))
}

/// Parses a `/reverse` body. An `error` field is no match.
fn parse_reverse_response(body: &str) -> Result<Option<ReverseGeocoded>, GeocodingError> {
    let parsed: ReverseBody =
        serde_json::from_str(body).map_err(|e| GeocodingError::parse(e.to_string()))?;

    if parsed.error.is_some() {
        return Ok(None);
    }

    let city = parsed
        .address
        .and_then(|a| a.city.or(a.town).or(a.village));

    Ok(Some(ReverseGeocoded {
        address: parsed.display_name,
        city,
    }))
}
