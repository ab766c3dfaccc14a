//! Pure Vedic math for kundli computation.
//!
//! This crate provides:
//! - Rashi (zodiac sign) and nakshatra/pada classification from sidereal
//!   longitudes
//! - Graha identity and fixed attribute tables (lords, colors, lucky numbers)
//! - Vimshottari mahadasha arithmetic (120-year, 9-graha cycle)
//!
//! Everything here is deterministic and free of I/O; ephemeris access lives
//! in `kundli_engine` behind oracle traits.

pub mod graha;
pub mod nakshatra;
pub mod rashi;
pub mod util;
pub mod vimshottari;

pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, weekday_lord};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Rashi, RashiInfo, rashi_from_longitude};
pub use util::{Dms, deg_to_dms, normalize_360};
pub use vimshottari::{
    CYCLE_YEARS, MahadashaState, VIMSHOTTARI_GRAHAS, VIMSHOTTARI_YEARS, birth_balance_years,
    mahadasha_at, period_years,
};
