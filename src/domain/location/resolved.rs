//! A fully resolved location.

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Label used when a shared position has no known address.
pub const UNKNOWN_CITY: &str = "Unknown City";

/// Coordinates plus the label shown to the user.
///
/// Only the location resolver builds these, and always with both parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    coordinates: Coordinates,
    display_address: String,
}

impl ResolvedLocation {
    pub fn new(coordinates: Coordinates, display_address: impl Into<String>) -> Self {
        Self {
            coordinates,
            display_address: display_address.into(),
        }
    }

    /// A resolved location labelled with [`UNKNOWN_CITY`].
    pub fn unlabelled(coordinates: Coordinates) -> Self {
        Self::new(coordinates, UNKNOWN_CITY)
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn display_address(&self) -> &str {
        &self.display_address
    }
}
