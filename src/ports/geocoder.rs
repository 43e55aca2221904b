//! Geocoder Port - Interface for place-name and coordinate lookups.
//!
//! Providers are unreliable network services. Implementations report what
//! went wrong through `GeocodingError`; deciding how to present a failure to
//! the user is left to the caller.
//!
//! # Example
//!
//! ```ignore
//! let place = geocoder.forward("Paris, France").await?;
//! if let Some(place) = place {
//!     println!("{} -> {}", place.coordinates, place.address.unwrap_or_default());
//! }
//! ```

use async_trait::async_trait;

use crate::domain::location::Coordinates;

/// Port for geocoding providers (Nominatim, mocks).
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolves free text to the best matching place.
    ///
    /// Returns `Ok(None)` when the provider has no match.
    async fn forward(&self, query: &str) -> Result<Option<GeocodedPlace>, GeocodingError>;

    /// Looks up the address of a position.
    ///
    /// Returns `Ok(None)` when the provider knows nothing about the position.
    async fn reverse(
        &self,
        coordinates: Coordinates,
    ) -> Result<Option<ReverseGeocoded>, GeocodingError>;
}

/// Forward geocoding match.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub coordinates: Coordinates,
    /// Formatted address, when the provider supplies one.
    pub address: Option<String>,
}

impl GeocodedPlace {
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            address: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// Reverse geocoding result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReverseGeocoded {
    /// Full formatted address.
    pub address: Option<String>,
    /// City component of the address.
    pub city: Option<String>,
}

impl ReverseGeocoded {
    /// Best label for display: full address, then city.
    pub fn label(&self) -> Option<&str> {
        self.address
            .as_deref()
            .or(self.city.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

/// Errors from geocoding providers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeocodingError {
    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Provider answered with a non-success status.
    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl GeocodingError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
