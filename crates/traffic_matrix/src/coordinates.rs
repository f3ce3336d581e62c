use std::fmt::Display;

/// A latitude/longitude pair kept exactly as the user typed it.
///
/// Values are not parsed as numbers: whatever was given is forwarded to the
/// distance matrix service, which decides whether it makes sense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub lat: String,
    pub lng: String,
}

impl Coordinates {
    pub fn new(lat: impl Into<String>, lng: impl Into<String>) -> Self {
        Self {
            lat: lat.into(),
            lng: lng.into(),
        }
    }
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
