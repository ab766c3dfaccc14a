//! Rashi (zodiac sign) classification.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees each, starting
//! from Mesha (Aries) at 0 deg sidereal. Given a sidereal longitude we
//! identify the sign and the position within it.

use serde::Serialize;

use crate::graha::Graha;
use crate::util::{Dms, deg_to_dms, normalize_360};

/// The 12 rashis starting from Mesha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in zodiacal order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Devanagari name, for Hindi-language replies.
    pub const fn hindi_name(self) -> &'static str {
        match self {
            Self::Mesha => "मेष",
            Self::Vrishabha => "वृषभ",
            Self::Mithuna => "मिथुन",
            Self::Karka => "कर्क",
            Self::Simha => "सिंह",
            Self::Kanya => "कन्या",
            Self::Tula => "तुला",
            Self::Vrischika => "वृश्चिक",
            Self::Dhanu => "धनु",
            Self::Makara => "मकर",
            Self::Kumbha => "कुंभ",
            Self::Meena => "मीन",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Planetary lord of the sign (standard Vedic lordship).
    pub const fn lord(self) -> Graha {
        match self {
            Self::Mesha | Self::Vrischika => Graha::Mangal,
            Self::Vrishabha | Self::Tula => Graha::Shukra,
            Self::Mithuna | Self::Kanya => Graha::Buddh,
            Self::Karka => Graha::Chandra,
            Self::Simha => Graha::Surya,
            Self::Dhanu | Self::Meena => Graha::Guru,
            Self::Makara | Self::Kumbha => Graha::Shani,
        }
    }

    /// Rashi from 0-based index; None if index >= 12.
    pub fn from_index(idx: u8) -> Option<Self> {
        ALL_RASHIS.get(idx as usize).copied()
    }
}

/// Full rashi position of a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    /// The sign.
    pub rashi: Rashi,
    /// 0-based sign index (0 = Mesha).
    pub rashi_index: u8,
    /// Decimal degrees within the sign [0, 30).
    pub degrees_in_rashi: f64,
    /// Position within the sign as DMS.
    pub dms: Dms,
}

/// Determine rashi from a sidereal ecliptic longitude.
///
/// The input is normalized into [0, 360) first; each sign spans exactly
/// 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), and so on.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    // Clamp guards the floating-point edge at exactly 360.0.
    let idx = ((lon / 30.0).floor() as u8).min(11);
    let degrees_in_rashi = lon - (idx as f64) * 30.0;
    RashiInfo {
        rashi: ALL_RASHIS[idx as usize],
        rashi_index: idx,
        degrees_in_rashi,
        dms: deg_to_dms(degrees_in_rashi),
    }
}
