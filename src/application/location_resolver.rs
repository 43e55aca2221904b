//! LocationResolver - Turns any location query into coordinates plus a label.
//!
//! Provider failures are logged and reported as `LocationNotFound`, the same
//! as a genuine miss. Shared coordinates always resolve; only their label
//! depends on the provider.

use std::sync::Arc;

use crate::domain::location::{Coordinates, LocationQuery, ResolvedLocation};
use crate::ports::Geocoder;

/// The query could not be resolved, or the provider failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("location not found")]
pub struct LocationNotFound;

/// Service resolving user queries through a [`Geocoder`].
pub struct LocationResolver {
    geocoder: Arc<dyn Geocoder>,
}

impl LocationResolver {
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self { geocoder }
    }

    /// Resolves a query into a [`ResolvedLocation`].
    ///
    /// Coordinate queries never fail.
    pub async fn resolve(&self, query: &LocationQuery) -> Result<ResolvedLocation, LocationNotFound> {
        match query {
            LocationQuery::Text(raw) => self.resolve_text(raw).await,
            LocationQuery::Coordinates(coordinates) => Ok(self.resolve_coordinates(*coordinates).await),
        }
    }

    async fn resolve_text(&self, raw: &str) -> Result<ResolvedLocation, LocationNotFound> {
        match self.geocoder.forward(raw).await {
            Ok(Some(place)) => {
                let label = place
                    .address
                    .filter(|a| !a.trim().is_empty())
                    .unwrap_or_else(|| raw.to_string());
                tracing::debug!(coordinates = %place.coordinates, "Resolved text query");
                Ok(ResolvedLocation::new(place.coordinates, label))
            }
            Ok(None) => {
                tracing::debug!("No geocoding match for text query");
                Err(LocationNotFound)
            }
            Err(e) => {
                tracing::warn!("Forward geocoding failed: {}", e);
                Err(LocationNotFound)
            }
        }
    }

    async fn resolve_coordinates(&self, coordinates: Coordinates) -> ResolvedLocation {
        match self.geocoder.reverse(coordinates).await {
            Ok(Some(found)) => match found.label() {
                Some(label) => ResolvedLocation::new(coordinates, label),
                None => ResolvedLocation::unlabelled(coordinates),
            },
            Ok(None) => ResolvedLocation::unlabelled(coordinates),
            Err(e) => {
                tracing::warn!(%coordinates, "Reverse geocoding failed: {}", e);
                ResolvedLocation::unlabelled(coordinates)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::geocoding::{MockGeocoder, MockGeocoderError};
    use crate::domain::location::UNKNOWN_CITY;
    use crate::ports::{GeocodedPlace, ReverseGeocoded};

    fn coords(lat: f64, lon: f64) -> Coordinates {
        Coordinates::new(lat, lon).unwrap()
    }

    fn resolver(geocoder: &MockGeocoder) -> LocationResolver {
        LocationResolver::new(Arc::new(geocoder.clone()))
    }

    #[tokio::test]
    async fn text_query_prefers_provider_address() {
        let geocoder = MockGeocoder::new().with_place(
            "paris",
            GeocodedPlace::new(coords(48.8566, 2.3522)).with_address("Paris, Île-de-France, France"),
        );

        let loc = resolver(&geocoder)
            .resolve(&LocationQuery::text("paris").unwrap())
            .await
            .unwrap();

        assert_eq!(loc.display_address(), "Paris, Île-de-France, France");
        assert_eq!(loc.coordinates(), coords(48.8566, 2.3522));
        assert_eq!(geocoder.forward_calls(), vec!["paris".to_string()]);
    }

    #[tokio::test]
    async fn text_query_falls_back_to_raw_input() {
        let geocoder = MockGeocoder::new().with_place("Tokyo", GeocodedPlace::new(coords(35.6762, 139.6503)));

        let loc = resolver(&geocoder)
            .resolve(&LocationQuery::text("Tokyo").unwrap())
            .await
            .unwrap();

        assert_eq!(loc.display_address(), "Tokyo");
    }

    #[tokio::test]
    async fn text_query_without_match_is_not_found() {
        let geocoder = MockGeocoder::new();

        let result = resolver(&geocoder)
            .resolve(&LocationQuery::text("Zzznotacity").unwrap())
            .await;

        assert_eq!(result, Err(LocationNotFound));
    }

    #[tokio::test]
    async fn provider_error_is_not_found() {
        let geocoder = MockGeocoder::new().with_error(MockGeocoderError::Timeout { timeout_secs: 10 });

        let result = resolver(&geocoder)
            .resolve(&LocationQuery::text("London").unwrap())
            .await;

        assert_eq!(result, Err(LocationNotFound));
    }

    #[tokio::test]
    async fn coordinates_use_reverse_address() {
        let geocoder = MockGeocoder::new().with_reverse(ReverseGeocoded {
            address: Some("Lower Manhattan, New York, USA".to_string()),
            city: Some("New York".to_string()),
        });

        let loc = resolver(&geocoder)
            .resolve(&LocationQuery::coordinates(coords(40.7128, -74.0060)))
            .await
            .unwrap();

        assert_eq!(loc.display_address(), "Lower Manhattan, New York, USA");
    }

    #[tokio::test]
    async fn coordinates_use_city_when_address_missing() {
        let geocoder = MockGeocoder::new().with_reverse(ReverseGeocoded {
            address: None,
            city: Some("New York".to_string()),
        });

        let loc = resolver(&geocoder)
            .resolve(&LocationQuery::coordinates(coords(40.7128, -74.0060)))
            .await
            .unwrap();

        assert_eq!(loc.display_address(), "New York");
    }

    #[tokio::test]
    async fn coordinates_survive_reverse_failure() {
        let geocoder = MockGeocoder::new().with_error(MockGeocoderError::Network {
            message: "connection refused".to_string(),
        });
        let nyc = coords(40.7128, -74.0060);

        let loc = resolver(&geocoder)
            .resolve(&LocationQuery::coordinates(nyc))
            .await
            .unwrap();

        assert_eq!(loc.display_address(), UNKNOWN_CITY);
        assert_eq!(loc.coordinates(), nyc);
        assert_eq!(geocoder.reverse_calls(), vec![nyc]);
    }

    #[tokio::test]
    async fn coordinates_without_reverse_match_are_unlabelled() {
        let geocoder = MockGeocoder::new();

        let loc = resolver(&geocoder)
            .resolve(&LocationQuery::coordinates(coords(0.0, 0.0)))
            .await
            .unwrap();

        assert_eq!(loc.display_address(), UNKNOWN_CITY);
    }
}
