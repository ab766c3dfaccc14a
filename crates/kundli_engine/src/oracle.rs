//! Oracle traits for the external ephemeris and house-system backends.
//!
//! The planetary-theory math itself is out of scope; these traits are the
//! seam where a real backend (or a fixed test double) plugs in. The house
//! oracle's result shape has historically been unstable across backend
//! versions, so [`RawHouses`] is the single adapter type that normalizes
//! every plausible shape, and [`RawHouses::tropical_ascendant`] is the one
//! place that probes them.

use kundli_vedic::Graha;

use crate::error::OracleError;

/// Ephemeris oracle: tropical ecliptic longitude of a body.
///
/// Queried for the 7 classical bodies plus Rahu (the mean ascending node).
/// Ketu is derived by the position resolver and never queried.
pub trait EphemerisOracle {
    /// Tropical ecliptic longitude in degrees at a Julian Day (UT).
    fn tropical_longitude(&self, jd_ut: f64, body: Graha) -> Result<f64, OracleError>;
}

/// Supported house systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HouseSystem {
    Placidus,
}

impl HouseSystem {
    /// Single-letter code used by conventional house-system APIs.
    pub const fn code(self) -> char {
        match self {
            Self::Placidus => 'P',
        }
    }
}

/// Named points some backends return alongside (or instead of) cusps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HousePoints {
    /// Tropical ascendant in degrees.
    pub ascendant: f64,
    /// Tropical midheaven in degrees.
    pub midheaven: f64,
}

/// Normalized house-oracle output.
///
/// Backends disagree on where the ascendant lives: some return it as the
/// first cusp, some in a named points block, some as a top-level field.
/// All three are carried here so the probe stays in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct RawHouses {
    /// Tropical cusp longitudes, first cusp = ascendant when present.
    pub cusps: Vec<f64>,
    /// Named points block, if the backend provides one.
    pub points: Option<HousePoints>,
    /// Top-level ascendant field, if the backend provides one.
    pub ascendant: Option<f64>,
}

impl RawHouses {
    /// Probe the plausible result shapes for a tropical ascendant, in
    /// order: first cusp, points block, top-level field.
    pub fn tropical_ascendant(&self) -> Option<f64> {
        if let Some(&first) = self.cusps.first() {
            return Some(first);
        }
        if let Some(points) = &self.points {
            return Some(points.ascendant);
        }
        self.ascendant
    }
}

/// House-system oracle: cusps and ayanamsa.
pub trait HouseOracle {
    /// House cusps (tropical frame) for a moment and place.
    fn houses(
        &self,
        jd_ut: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<RawHouses, OracleError>;

    /// Ayanamsa in degrees at a Julian Day (UT).
    fn ayanamsa(&self, jd_ut: f64) -> Result<f64, OracleError>;
}
