//! Geocoding Adapters.
//!
//! - `NominatimGeocoder` - OpenStreetMap Nominatim search and reverse APIs
//! - `MockGeocoder` - Configurable mock for testing

mod mock;
mod nominatim;

pub use mock::{MockGeocoder, MockGeocoderError};
pub use nominatim::NominatimGeocoder;
