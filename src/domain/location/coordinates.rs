//! Geographic coordinate pair.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// A validated latitude/longitude pair in decimal degrees.
///
/// Both values are finite and within WGS84 bounds. There is no way to build
/// a `Coordinates` with a missing or non-numeric component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Creates a coordinate pair, rejecting non-finite or out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        Self::check("latitude", latitude, 90.0)?;
        Self::check("longitude", longitude, 180.0)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parses provider-supplied decimal strings (Nominatim returns `"48.85"`).
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, ValidationError> {
        let lat = latitude
            .trim()
            .parse::<f64>()
            .map_err(|e| ValidationError::invalid_format("latitude", e.to_string()))?;
        let lon = longitude
            .trim()
            .parse::<f64>()
            .map_err(|e| ValidationError::invalid_format("longitude", e.to_string()))?;
        Self::new(lat, lon)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    fn check(field: &str, value: f64, bound: f64) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(field, "not a finite number"));
        }
        if !(-bound..=bound).contains(&value) {
            return Err(ValidationError::out_of_range(field, -bound, bound, value));
        }
        Ok(())
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}
