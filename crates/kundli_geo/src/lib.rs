//! Place-name resolution for birth charts.
//!
//! Well-known Indian cities resolve from a static table with zero I/O.
//! Anything else goes to a pluggable external oracle; if the oracle is
//! unavailable (timeout, transport failure) the resolver falls back to a
//! fixed default location deterministically instead of blocking, while a
//! definitive miss stays a recoverable [`GeoError::NotFound`].

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::Serialize;
use tracing::warn;

pub mod cities;

pub use cities::{COUNTRY_OFFSETS, INDIAN_CITIES, country_offset};

/// A resolved place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoResolution {
    pub latitude: f64,
    pub longitude: f64,
    pub tz_offset_hours: f64,
    /// Canonical display label for the place.
    pub place: String,
    pub country: String,
}

/// Errors from place resolution.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GeoError {
    /// The place is definitively unknown; the user should re-enter it.
    NotFound(String),
    /// The external oracle could not be reached or timed out.
    Unavailable(String),
}

impl Display for GeoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(place) => write!(f, "place not found: {place}"),
            Self::Unavailable(msg) => write!(f, "geocoding unavailable: {msg}"),
        }
    }
}

impl Error for GeoError {}

/// External geocoding backend, consulted only on static-table miss.
pub trait GeocodingOracle {
    fn resolve(&self, place: &str) -> Result<GeoResolution, GeoError>;
}

/// Fixed default location used when the external oracle is unavailable.
fn default_location() -> GeoResolution {
    GeoResolution {
        latitude: 28.6139,
        longitude: 77.2090,
        tz_offset_hours: 5.5,
        place: "New Delhi".to_string(),
        country: "India".to_string(),
    }
}

/// Place resolver: static cache first, external oracle on miss.
pub struct Geocoder {
    oracle: Option<Box<dyn GeocodingOracle + Send + Sync>>,
}

impl Geocoder {
    /// Resolver with no external backend; only the static table answers.
    pub fn offline() -> Self {
        Self { oracle: None }
    }

    /// Resolver backed by an external oracle for cache misses.
    pub fn with_oracle(oracle: Box<dyn GeocodingOracle + Send + Sync>) -> Self {
        Self {
            oracle: Some(oracle),
        }
    }

    /// Resolve a place name.
    ///
    /// Lookup is case-insensitive on the trimmed input. A static-table hit
    /// costs no I/O. On oracle unavailability the fixed default location is
    /// returned rather than an error; a definitive miss propagates as
    /// [`GeoError::NotFound`].
    pub fn resolve(&self, place: &str) -> Result<GeoResolution, GeoError> {
        let key = place.trim().to_lowercase();
        if key.is_empty() {
            return Err(GeoError::NotFound(place.to_string()));
        }

        if let Some(&(_, label, lat, lon)) =
            INDIAN_CITIES.iter().find(|(city, _, _, _)| *city == key)
        {
            return Ok(GeoResolution {
                latitude: lat,
                longitude: lon,
                tz_offset_hours: 5.5,
                place: label.to_string(),
                country: "India".to_string(),
            });
        }

        match &self.oracle {
            Some(oracle) => match oracle.resolve(place) {
                Ok(mut resolution) => {
                    if resolution.tz_offset_hours == 0.0 {
                        if let Some(off) = country_offset(&resolution.country) {
                            resolution.tz_offset_hours = off;
                        }
                    }
                    Ok(resolution)
                }
                Err(GeoError::Unavailable(msg)) => {
                    warn!(place, error = %msg, "geocoding oracle unavailable, using default");
                    Ok(default_location())
                }
                Err(e) => Err(e),
            },
            None => Err(GeoError::NotFound(place.to_string())),
        }
    }
}
