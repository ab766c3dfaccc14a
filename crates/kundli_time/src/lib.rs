//! Temporal normalization: civil birth time to Julian Day (UT).
//!
//! The caller supplies the UTC offset directly (from geocoding or explicit
//! input); there is no timezone-database lookup here. Conversion subtracts
//! the offset to get UTC, then applies the standard Gregorian-calendar
//! Julian Day algorithm. Field validation happens upstream in the parser;
//! this crate trusts its inputs.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Days per Julian year, used for age arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// A civil birth moment: local clock time plus a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthMoment {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    /// Signed offset of local clock from UTC, in hours (e.g. 5.5 for IST).
    pub tz_offset_hours: f64,
}

impl BirthMoment {
    /// Julian Day (UT) of this moment.
    pub fn to_jd_ut(&self) -> f64 {
        let ut_hours =
            self.hour as f64 + self.minute as f64 / 60.0 - self.tz_offset_hours;
        gregorian_jd(self.year, self.month as f64, self.day as f64 + ut_hours / 24.0)
    }
}

/// Gregorian calendar date to Julian Day. `day` may carry a fractional part.
fn gregorian_jd(year: i32, month: f64, day: f64) -> f64 {
    let y = year as f64;
    let (y2, m2) = if month <= 2.0 {
        (y - 1.0, month + 12.0)
    } else {
        (y, month)
    };
    let a = (y2 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y2 + 4716.0)).floor() + (30.6001 * (m2 + 1.0)).floor() + day + b - 1524.5
}

/// Julian Day (UT) of a UTC wall-clock instant.
pub fn jd_ut_from_utc(t: DateTime<Utc>) -> f64 {
    let day = t.day() as f64
        + t.hour() as f64 / 24.0
        + t.minute() as f64 / 1440.0
        + t.second() as f64 / 86400.0;
    gregorian_jd(t.year(), t.month() as f64, day)
}

/// Weekday of a Julian Day: 0 = Sunday .. 6 = Saturday.
pub fn weekday_from_jd(jd: f64) -> u8 {
    // JD 0.0 was a Monday noon; shifting by 1.5 aligns day boundaries at
    // midnight UT with Sunday = 0.
    (((jd + 1.5).floor() as i64).rem_euclid(7)) as u8
}

/// Elapsed age in Julian years between two Julian Days.
pub fn age_years(birth_jd: f64, now_jd: f64) -> f64 {
    (now_jd - birth_jd) / DAYS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn j2000_epoch() {
        // 2000-01-01 12:00 UT = JD 2451545.0
        let m = BirthMoment {
            year: 2000,
            month: 1,
            day: 1,
            hour: 12,
            minute: 0,
            tz_offset_hours: 0.0,
        };
        assert!((m.to_jd_ut() - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn offset_subtracted() {
        // 17:30 IST (+5.5) is 12:00 UT.
        let ist = BirthMoment {
            year: 2000,
            month: 1,
            day: 1,
            hour: 17,
            minute: 30,
            tz_offset_hours: 5.5,
        };
        assert!((ist.to_jd_ut() - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn january_handled_as_month_13() {
        // 1989-01-31 16:00 IST → 10:30 UT. Known JD for 1989-01-31 00:00 UT
        // is 2447557.5; 10:30 UT adds 0.4375 days.
        let m = BirthMoment {
            year: 1989,
            month: 1,
            day: 31,
            hour: 16,
            minute: 0,
            tz_offset_hours: 5.5,
        };
        assert!((m.to_jd_ut() - (2_447_557.5 + 0.4375)).abs() < 1e-9);
    }

    #[test]
    fn chrono_matches_birth_moment() {
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((jd_ut_from_utc(t) - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn weekday_known_dates() {
        // 2000-01-01 was a Saturday.
        let sat = BirthMoment {
            year: 2000,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            tz_offset_hours: 0.0,
        };
        assert_eq!(weekday_from_jd(sat.to_jd_ut()), 6);
        // 2000-01-02 was a Sunday.
        let sun = BirthMoment { day: 2, ..sat };
        assert_eq!(weekday_from_jd(sun.to_jd_ut()), 0);
    }

    #[test]
    fn age_one_year() {
        assert!((age_years(2_451_545.0, 2_451_545.0 + 365.25) - 1.0).abs() < 1e-12);
    }
}
