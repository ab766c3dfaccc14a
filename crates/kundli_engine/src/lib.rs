//! Kundli chart engine: oracle seams, position resolution, lagna, the chart
//! pipeline and the transit predictor.
//!
//! The underlying ephemeris and house-system math is delegated to external
//! oracles behind the traits in [`oracle`]; everything on this side of the
//! seam is deterministic given fixed oracle responses.

pub mod chart;
pub mod error;
pub mod lagna;
pub mod oracle;
pub mod positions;
pub mod transit;

pub use chart::{BirthDetails, GrahaPlacement, KundliResult, MahadashaReport, compute_kundli};
pub use error::{ChartError, OracleError};
pub use lagna::sidereal_lagna;
pub use oracle::{EphemerisOracle, HouseOracle, HousePoints, HouseSystem, RawHouses};
pub use positions::{GrahaLongitudes, graha_sidereal_longitudes, sidereal_from_tropical};
pub use transit::{Horoscope, daily_horoscope, horoscope_from_transits, house_offset};
