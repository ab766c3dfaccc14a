//! The 9 Vedic grahas and their fixed attribute tables.
//!
//! Besides identity and naming, each graha carries the attributes the
//! horoscope predictor draws on: a color and a candidate list of lucky
//! numbers. Weekday lordship follows the universal Vedic convention
//! (Sunday = Surya .. Saturday = Shani).

use serde::Serialize;

/// The 9 grahas in traditional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical bodies with ephemeris entries (Rahu/Ketu are derived).
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Devanagari name.
    pub const fn hindi_name(self) -> &'static str {
        match self {
            Self::Surya => "सूर्य",
            Self::Chandra => "चंद्र",
            Self::Mangal => "मंगल",
            Self::Buddh => "बुध",
            Self::Guru => "गुरु",
            Self::Shukra => "शुक्र",
            Self::Shani => "शनि",
            Self::Rahu => "राहु",
            Self::Ketu => "केतु",
        }
    }

    /// 0-based index into [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Traditional color, used for the lucky-color attribute.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Surya => "orange",
            Self::Chandra => "white",
            Self::Mangal => "red",
            Self::Buddh => "green",
            Self::Guru => "yellow",
            Self::Shukra => "pink",
            Self::Shani => "blue",
            Self::Rahu => "grey",
            Self::Ketu => "brown",
        }
    }

    /// Candidate lucky numbers ruled by this graha (numerology convention).
    pub const fn lucky_numbers(self) -> &'static [u8] {
        match self {
            Self::Surya => &[1, 10, 19],
            Self::Chandra => &[2, 11, 20],
            Self::Mangal => &[9, 18, 27],
            Self::Buddh => &[5, 14, 23],
            Self::Guru => &[3, 12, 21],
            Self::Shukra => &[6, 15, 24],
            Self::Shani => &[8, 17, 26],
            Self::Rahu => &[4, 13, 22],
            Self::Ketu => &[7, 16, 25],
        }
    }
}

/// Weekday lord: 0 = Sunday .. 6 = Saturday.
///
/// Returns None if the weekday index is out of range.
pub fn weekday_lord(weekday: u8) -> Option<Graha> {
    match weekday {
        0 => Some(Graha::Surya),
        1 => Some(Graha::Chandra),
        2 => Some(Graha::Mangal),
        3 => Some(Graha::Buddh),
        4 => Some(Graha::Guru),
        5 => Some(Graha::Shukra),
        6 => Some(Graha::Shani),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn names_nonempty() {
        for g in ALL_GRAHAS {
            assert!(!g.name().is_empty());
            assert!(!g.english_name().is_empty());
            assert!(!g.hindi_name().is_empty());
            assert!(!g.color().is_empty());
        }
    }

    #[test]
    fn lucky_numbers_nonempty() {
        for g in ALL_GRAHAS {
            assert!(!g.lucky_numbers().is_empty());
        }
    }

    #[test]
    fn weekday_lords() {
        assert_eq!(weekday_lord(0), Some(Graha::Surya));
        assert_eq!(weekday_lord(1), Some(Graha::Chandra));
        assert_eq!(weekday_lord(6), Some(Graha::Shani));
        assert_eq!(weekday_lord(7), None);
    }

    #[test]
    fn sapta_excludes_nodes() {
        assert!(!SAPTA_GRAHAS.contains(&Graha::Rahu));
        assert!(!SAPTA_GRAHAS.contains(&Graha::Ketu));
        assert_eq!(SAPTA_GRAHAS.len(), 7);
    }
}
