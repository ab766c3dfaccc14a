//! Transit positions and rule-based daily horoscope.
//!
//! Computes today's sidereal longitudes for all 9 grahas, derives each
//! body's house offset from a natal moon sign, and assembles a prediction
//! from fixed rule tables: a base sentence from the Moon's offset,
//! modifiers for Guru/Shani/Shukra in benefic or challenging houses, and a
//! bonus when the weekday lord matches the natal sign's lord. Lucky number
//! and color are chosen deterministically from the date.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use kundli_time::{jd_ut_from_utc, weekday_from_jd};
use kundli_vedic::{Graha, Rashi, weekday_lord};

use crate::error::ChartError;
use crate::oracle::{EphemerisOracle, HouseOracle};
use crate::positions::{GrahaLongitudes, graha_sidereal_longitudes};

/// Base predictions indexed by the Moon's house offset minus 1 (1st..12th).
const MOON_HOUSE_PREDICTIONS: [&str; 12] = [
    "The Moon transits your own sign today, sharpening instinct and self-focus.",
    "The Moon moves through your second house, drawing attention to money and family matters.",
    "The Moon in your third house favors short trips, messages and bold initiative.",
    "The Moon crosses your fourth house, pulling you toward home and inner comfort.",
    "The Moon lights your fifth house of creativity, romance and children.",
    "The Moon in your sixth house asks for attention to health and daily routine.",
    "The Moon transits your seventh house, putting partnerships at the center.",
    "The Moon in your eighth house stirs deep feelings; avoid unnecessary risk.",
    "The Moon moves through your ninth house, favoring learning and long journeys.",
    "The Moon crosses your tenth house, spotlighting career and public standing.",
    "The Moon in your eleventh house brings gains through friends and networks.",
    "The Moon in your twelfth house calls for rest, reflection and letting go.",
];

/// House offsets counted as supportive for the slow/benefic modifiers.
const BENEFIC_HOUSES: [u8; 4] = [1, 5, 9, 11];

/// House offsets counted as testing.
const CHALLENGING_HOUSES: [u8; 3] = [6, 8, 12];

/// A day's horoscope for one natal moon sign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Horoscope {
    pub rashi: Rashi,
    pub prediction: String,
    pub lucky_number: u8,
    pub lucky_color: &'static str,
}

/// House offset of a transiting body from a natal sign, 1-12.
pub fn house_offset(body_rashi_index: u8, natal_rashi_index: u8) -> u8 {
    ((body_rashi_index as i16 - natal_rashi_index as i16 + 12) % 12) as u8 + 1
}

fn benefic_modifier(graha: Graha, offset: u8) -> Option<&'static str> {
    if BENEFIC_HOUSES.contains(&offset) {
        match graha {
            Graha::Guru => Some("Jupiter's transit supports growth and good counsel."),
            Graha::Shukra => Some("Venus adds charm and ease to your interactions."),
            Graha::Shani => Some("Saturn rewards disciplined, patient effort."),
            _ => None,
        }
    } else if CHALLENGING_HOUSES.contains(&offset) {
        match graha {
            Graha::Guru => Some("Jupiter asks you to double-check optimistic assumptions."),
            Graha::Shukra => Some("Venus cautions against indulgence and overspending."),
            Graha::Shani => Some("Saturn tests your patience; keep commitments light."),
            _ => None,
        }
    } else {
        None
    }
}

/// Assemble the horoscope for a natal moon sign from today's positions.
///
/// Pure given fixed transit longitudes and a fixed date; exposed separately
/// from the oracle-querying wrapper for testability.
pub fn horoscope_from_transits(
    transits: &GrahaLongitudes,
    natal: Rashi,
    today: DateTime<Utc>,
) -> Horoscope {
    let natal_idx = natal.index();
    let moon_offset = house_offset(transits.rashi_index(Graha::Chandra), natal_idx);

    let mut prediction = String::from(MOON_HOUSE_PREDICTIONS[(moon_offset - 1) as usize]);
    for graha in [Graha::Guru, Graha::Shani, Graha::Shukra] {
        let offset = house_offset(transits.rashi_index(graha), natal_idx);
        if let Some(extra) = benefic_modifier(graha, offset) {
            prediction.push(' ');
            prediction.push_str(extra);
        }
    }

    let weekday = weekday_from_jd(jd_ut_from_utc(today));
    // weekday is always 0-6, so the lookup cannot miss; fall back to the
    // sign lord to avoid an unwrap.
    let day_lord = weekday_lord(weekday).unwrap_or(natal.lord());
    if day_lord == natal.lord() {
        prediction.push(' ');
        prediction.push_str("The day's ruler favors your sign; an auspicious day overall.");
    }

    let day = today.day();
    let month = today.month();
    let candidates = natal.lord().lucky_numbers();
    let lucky_number = candidates[((day + month) as usize) % candidates.len()];
    let lucky_color = if day % 2 == 0 {
        natal.lord().color()
    } else {
        day_lord.color()
    };

    Horoscope {
        rashi: natal,
        prediction,
        lucky_number,
        lucky_color,
    }
}

/// Query today's transits and build the horoscope for a natal moon sign.
pub fn daily_horoscope(
    ephemeris: &dyn EphemerisOracle,
    houses: &dyn HouseOracle,
    natal: Rashi,
    today: DateTime<Utc>,
) -> Result<Horoscope, ChartError> {
    let jd = jd_ut_from_utc(today);
    let aya = houses.ayanamsa(jd)?;
    let transits = graha_sidereal_longitudes(ephemeris, jd, aya)?;
    Ok(horoscope_from_transits(&transits, natal, today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn transits_with(moon: f64, guru: f64, shani: f64, shukra: f64) -> GrahaLongitudes {
        let mut longitudes = [0.0f64; 9];
        longitudes[Graha::Chandra.index() as usize] = moon;
        longitudes[Graha::Guru.index() as usize] = guru;
        longitudes[Graha::Shani.index() as usize] = shani;
        longitudes[Graha::Shukra.index() as usize] = shukra;
        GrahaLongitudes { longitudes }
    }

    #[test]
    fn offset_same_sign_is_first_house() {
        assert_eq!(house_offset(3, 3), 1);
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(house_offset(0, 11), 2);
        assert_eq!(house_offset(11, 0), 12);
    }

    #[test]
    fn offsets_always_in_range() {
        for b in 0..12 {
            for n in 0..12 {
                let o = house_offset(b, n);
                assert!((1..=12).contains(&o));
            }
        }
    }

    #[test]
    fn moon_offset_selects_base_sentence() {
        // Natal Mesha (0), Moon in Simha (120-150) → 5th house.
        let t = transits_with(125.0, 65.0, 65.0, 65.0);
        let today = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        let h = horoscope_from_transits(&t, Rashi::Mesha, today);
        assert!(h.prediction.starts_with(MOON_HOUSE_PREDICTIONS[4]));
    }

    #[test]
    fn benefic_jupiter_appends_modifier() {
        // Natal Mesha, Guru in Simha → 5th (benefic).
        let t = transits_with(10.0, 125.0, 65.0, 65.0);
        let today = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        let h = horoscope_from_transits(&t, Rashi::Mesha, today);
        assert!(h.prediction.contains("Jupiter's transit supports"));
    }

    #[test]
    fn challenging_saturn_appends_warning() {
        // Natal Mesha, Shani in Kanya (150-180) → 6th house.
        let t = transits_with(10.0, 65.0, 155.0, 65.0);
        let today = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        let h = horoscope_from_transits(&t, Rashi::Mesha, today);
        assert!(h.prediction.contains("Saturn tests your patience"));
    }

    #[test]
    fn lucky_number_deterministic() {
        let t = transits_with(10.0, 65.0, 65.0, 65.0);
        let today = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        let a = horoscope_from_transits(&t, Rashi::Mesha, today);
        let b = horoscope_from_transits(&t, Rashi::Mesha, today);
        assert_eq!(a, b);
        // Mesha lord Mangal, candidates [9,18,27], (5+3) % 3 = 2 → 27.
        assert_eq!(a.lucky_number, 27);
    }

    #[test]
    fn lucky_color_alternates_by_day_parity() {
        let t = transits_with(10.0, 65.0, 65.0, 65.0);
        let even = Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap();
        let h = horoscope_from_transits(&t, Rashi::Mesha, even);
        // Even day-of-month → sign lord's color (Mangal, red).
        assert_eq!(h.lucky_color, "red");
    }
}
