//! What the user asked to look up.

use super::Coordinates;

/// A location request, either typed by the user or shared from their device.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    /// Free text such as `"London"` or `"Paris, France"`.
    Text(String),
    /// Coordinates shared through the messenger's location button.
    Coordinates(Coordinates),
}

impl LocationQuery {
    /// Builds a text query from user input.
    ///
    /// Returns `None` when the input is empty or whitespace only. Surrounding
    /// whitespace is trimmed.
    pub fn text(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self::Text(trimmed.to_string()))
        }
    }

    pub fn coordinates(coordinates: Coordinates) -> Self {
        Self::Coordinates(coordinates)
    }

    /// Short description for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Coordinates(_) => "coordinates",
        }
    }
}
