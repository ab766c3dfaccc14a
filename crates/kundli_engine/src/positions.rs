//! Planetary position resolution: all 9 grahas in the sidereal frame.
//!
//! Queries the ephemeris oracle for the 7 classical bodies plus Rahu (mean
//! ascending node), derives Ketu as the opposite node, and converts every
//! longitude to sidereal by subtracting the ayanamsa.

use kundli_vedic::{Graha, SAPTA_GRAHAS, normalize_360};
use tracing::warn;

use crate::error::OracleError;
use crate::oracle::EphemerisOracle;

/// Sidereal longitudes of all 9 grahas, indexed by `Graha::index()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaLongitudes {
    pub longitudes: [f64; 9],
}

impl GrahaLongitudes {
    /// Sidereal longitude of a specific graha.
    pub fn longitude(&self, graha: Graha) -> f64 {
        self.longitudes[graha.index() as usize]
    }

    /// 0-based rashi index (0-11) of a specific graha.
    pub fn rashi_index(&self, graha: Graha) -> u8 {
        ((self.longitude(graha) / 30.0).floor() as u8).min(11)
    }
}

/// Convert a tropical longitude to sidereal.
pub fn sidereal_from_tropical(tropical_deg: f64, ayanamsa_deg: f64) -> f64 {
    normalize_360(tropical_deg - ayanamsa_deg)
}

/// Resolve sidereal longitudes for all 9 grahas at a Julian Day (UT).
///
/// Ketu is `rahu + 180` normalized, never queried. An oracle failure is
/// logged and propagated; no position is fabricated.
pub fn graha_sidereal_longitudes(
    ephemeris: &dyn EphemerisOracle,
    jd_ut: f64,
    ayanamsa_deg: f64,
) -> Result<GrahaLongitudes, OracleError> {
    let mut longitudes = [0.0f64; 9];

    for graha in SAPTA_GRAHAS {
        let tropical = ephemeris.tropical_longitude(jd_ut, graha).map_err(|e| {
            warn!(graha = graha.name(), jd_ut, error = %e, "ephemeris query failed");
            e
        })?;
        longitudes[graha.index() as usize] = sidereal_from_tropical(tropical, ayanamsa_deg);
    }

    let rahu_tropical = ephemeris
        .tropical_longitude(jd_ut, Graha::Rahu)
        .map_err(|e| {
            warn!(graha = "Rahu", jd_ut, error = %e, "ephemeris query failed");
            e
        })?;
    let rahu = sidereal_from_tropical(rahu_tropical, ayanamsa_deg);
    longitudes[Graha::Rahu.index() as usize] = rahu;
    longitudes[Graha::Ketu.index() as usize] = normalize_360(rahu + 180.0);

    Ok(GrahaLongitudes { longitudes })
}
