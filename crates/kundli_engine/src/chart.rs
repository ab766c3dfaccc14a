//! The kundli chart pipeline.
//!
//! Runs temporal normalization, position resolution, lagna calculation,
//! rashi/nakshatra classification, and the Vimshottari mahadasha walk, and
//! assembles the immutable [`KundliResult`] snapshot. Given identical birth
//! details and identical oracle responses the result is byte-for-byte
//! identical.

use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::Serialize;

use kundli_time::{BirthMoment, age_years, jd_ut_from_utc};
use kundli_vedic::{
    ALL_GRAHAS, Graha, MahadashaState, NakshatraInfo, Rashi, RashiInfo, mahadasha_at,
    nakshatra_from_longitude, rashi_from_longitude,
};

use crate::error::ChartError;
use crate::lagna::sidereal_lagna;
use crate::oracle::{EphemerisOracle, HouseOracle};
use crate::positions::graha_sidereal_longitudes;

/// Validated birth details, consumed only by this pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthDetails {
    pub moment: BirthMoment,
    /// Geographic latitude in degrees.
    pub latitude: f64,
    /// Geographic longitude in degrees.
    pub longitude: f64,
}

/// One graha's placement in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrahaPlacement {
    pub graha: Graha,
    pub sidereal_longitude: f64,
    pub rashi: Rashi,
}

/// Mahadasha state plus the calendar-approximate end of the current period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MahadashaReport {
    pub state: MahadashaState,
    /// End of the current period: "now" plus whole years and whole months
    /// from the fractional remainder. Calendar-approximate by design.
    pub approximate_end: NaiveDate,
}

/// Immutable chart snapshot returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KundliResult {
    /// Ascendant sign.
    pub lagna: RashiInfo,
    /// Moon sign.
    pub moon_rashi: RashiInfo,
    /// Moon's nakshatra and pada.
    pub moon_nakshatra: NakshatraInfo,
    /// Current Vimshottari mahadasha.
    pub mahadasha: MahadashaReport,
    /// All 9 grahas in traditional order.
    pub grahas: Vec<GrahaPlacement>,
}

/// Project `years` forward from `from` as whole years + whole months.
fn approximate_future_date(from: NaiveDate, years: f64) -> NaiveDate {
    let whole_years = years.max(0.0).floor() as u32;
    let whole_months = ((years.max(0.0) - whole_years as f64) * 12.0).round() as u32;
    from.checked_add_months(Months::new(whole_years * 12 + whole_months))
        .unwrap_or(from)
}

/// Compute the full kundli for a birth moment and place.
///
/// `now` drives the mahadasha walk (the current period is a function of
/// elapsed time); passing a fixed instant makes the whole pipeline a pure
/// function of its arguments.
pub fn compute_kundli(
    ephemeris: &dyn EphemerisOracle,
    houses: &dyn HouseOracle,
    birth: &BirthDetails,
    now: DateTime<Utc>,
) -> Result<KundliResult, ChartError> {
    let birth_jd = birth.moment.to_jd_ut();
    let aya = houses.ayanamsa(birth_jd)?;
    let lons = graha_sidereal_longitudes(ephemeris, birth_jd, aya)?;
    let lagna_lon = sidereal_lagna(houses, birth_jd, birth.latitude, birth.longitude)?;

    let moon_lon = lons.longitude(Graha::Chandra);
    let moon_rashi = rashi_from_longitude(moon_lon);
    let moon_nakshatra = nakshatra_from_longitude(moon_lon);

    let age = age_years(birth_jd, jd_ut_from_utc(now));
    let state = mahadasha_at(moon_lon, age);
    let mahadasha = MahadashaReport {
        state,
        approximate_end: approximate_future_date(now.date_naive(), state.years_remaining),
    };

    let grahas = ALL_GRAHAS
        .iter()
        .map(|&g| {
            let lon = lons.longitude(g);
            GrahaPlacement {
                graha: g,
                sidereal_longitude: lon,
                rashi: rashi_from_longitude(lon).rashi,
            }
        })
        .collect();

    Ok(KundliResult {
        lagna: rashi_from_longitude(lagna_lon),
        moon_rashi,
        moon_nakshatra,
        mahadasha,
        grahas,
    })
}
