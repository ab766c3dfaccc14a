//! Lagna (ascendant) calculation.
//!
//! The house oracle computes cusps in the tropical frame (Placidus); the
//! first cusp is the tropical ascendant. Subtracting the ayanamsa at the
//! same Julian Day yields the sidereal lagna.

use tracing::warn;

use crate::error::ChartError;
use crate::oracle::{HouseOracle, HouseSystem};
use crate::positions::sidereal_from_tropical;

/// Sidereal ascendant in degrees at a moment and place.
///
/// A house-oracle result with no recognizable ascendant surfaces as
/// [`ChartError::AscendantUnresolved`] rather than a fabricated 0 deg.
pub fn sidereal_lagna(
    houses: &dyn HouseOracle,
    jd_ut: f64,
    latitude: f64,
    longitude: f64,
) -> Result<f64, ChartError> {
    let raw = houses.houses(jd_ut, latitude, longitude, HouseSystem::Placidus)?;
    let tropical_asc = raw.tropical_ascendant().ok_or_else(|| {
        warn!(jd_ut, latitude, longitude, "no ascendant in house result");
        ChartError::AscendantUnresolved
    })?;
    let aya = houses.ayanamsa(jd_ut)?;
    Ok(sidereal_from_tropical(tropical_asc, aya))
}
