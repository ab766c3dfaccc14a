//! Shared angle utilities for Vedic calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Degrees-minutes-seconds representation of an angle within a sign.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Dms {
    /// Whole degrees.
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds, may include a fractional part.
    pub seconds: f64,
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Negative input is folded to its absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let rem = (d - degrees as f64) * 60.0;
    let minutes = rem.floor() as u8;
    let seconds = (rem - minutes as f64) * 60.0;
    Dms {
        degrees,
        minutes,
        seconds,
    }
}
