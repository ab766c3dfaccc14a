//! Vimshottari mahadasha: the 120-year, 9-graha cyclic period system.
//!
//! Pure arithmetic over a fixed table, no external dependency. The Moon's
//! sidereal longitude at birth fixes the starting (birth) lord and how much
//! of that lord's period is still to run; successive full periods then tile
//! the subject's elapsed age with no gap or overlap.

use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::{NAKSHATRA_SPAN, nakshatra_from_longitude};
use crate::util::normalize_360;

/// Vimshottari graha sequence: Ketu, Shukra, Surya, Chandra, Mangal, Rahu,
/// Guru, Shani, Buddh.
pub const VIMSHOTTARI_GRAHAS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Period lengths in years, aligned with [`VIMSHOTTARI_GRAHAS`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Full cycle length: the nine periods sum to exactly 120 years.
pub const CYCLE_YEARS: f64 = 120.0;

/// Upper bound on the walk-forward loop. Two full cycles cover 240 years of
/// elapsed age, beyond any finite human age; the loop wraps modulo the cycle
/// for anything longer.
pub const MAX_WALK_PERIODS: usize = 2 * VIMSHOTTARI_GRAHAS.len();

/// Period length in years for a graha in the Vimshottari sequence.
///
/// Returns 0.0 for a graha not in the sequence (unreachable: all 9 are).
pub fn period_years(graha: Graha) -> f64 {
    for (i, g) in VIMSHOTTARI_GRAHAS.iter().enumerate() {
        if *g == graha {
            return VIMSHOTTARI_YEARS[i];
        }
    }
    0.0
}

/// Current mahadasha relative to a given elapsed age.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MahadashaState {
    /// Graha ruling the current period.
    pub lord: Graha,
    /// Full length of the current lord's period in years.
    pub total_years: f64,
    /// Years elapsed inside the current period, in [0, total_years).
    pub years_completed: f64,
    /// Years left in the current period.
    pub years_remaining: f64,
    /// Balance of the birth lord's period at the moment of birth.
    pub birth_balance_years: f64,
}

/// Fraction of its nakshatra the Moon had traversed at birth, in [0, 1).
pub fn nakshatra_progress(moon_sidereal_lon: f64) -> f64 {
    let lon = normalize_360(moon_sidereal_lon);
    (lon % NAKSHATRA_SPAN) / NAKSHATRA_SPAN
}

/// Balance of the birth lord's mahadasha still to run at birth, in years.
pub fn birth_balance_years(moon_sidereal_lon: f64) -> f64 {
    let lord = nakshatra_from_longitude(moon_sidereal_lon).nakshatra.lord();
    period_years(lord) * (1.0 - nakshatra_progress(moon_sidereal_lon))
}

/// Compute the mahadasha active at `age_years` after birth.
///
/// Walks the fixed sequence starting at the birth lord, using the birth
/// balance for the first period and full lengths thereafter, until the
/// accumulated years exceed the elapsed age. Ages beyond one full cycle
/// are reduced modulo 120 before the walk, so [`MAX_WALK_PERIODS`] always
/// suffices.
pub fn mahadasha_at(moon_sidereal_lon: f64, age_years: f64) -> MahadashaState {
    let birth_lord = nakshatra_from_longitude(moon_sidereal_lon).nakshatra.lord();
    let start = VIMSHOTTARI_GRAHAS
        .iter()
        .position(|&g| g == birth_lord)
        .unwrap_or(0);
    let balance = birth_balance_years(moon_sidereal_lon);

    let age = if age_years < 0.0 {
        0.0
    } else {
        age_years % CYCLE_YEARS
    };

    let mut accumulated = 0.0;
    for step in 0..MAX_WALK_PERIODS {
        let idx = (start + step) % VIMSHOTTARI_GRAHAS.len();
        let full = VIMSHOTTARI_YEARS[idx];
        let span = if step == 0 { balance } else { full };
        if accumulated + span > age {
            // Inside the birth lord's first (partial) period the years
            // already elapsed before birth count toward years_completed.
            let consumed_before_birth = if step == 0 { full - balance } else { 0.0 };
            let years_completed = consumed_before_birth + (age - accumulated);
            return MahadashaState {
                lord: VIMSHOTTARI_GRAHAS[idx],
                total_years: full,
                years_completed,
                years_remaining: full - years_completed,
                birth_balance_years: balance,
            };
        }
        accumulated += span;
    }

    // Unreachable: age < 120 and the walk covers 240+ years. Return the
    // birth lord with a full period rather than panicking.
    MahadashaState {
        lord: birth_lord,
        total_years: period_years(birth_lord),
        years_completed: 0.0,
        years_remaining: period_years(birth_lord),
        birth_balance_years: balance,
    }
}
