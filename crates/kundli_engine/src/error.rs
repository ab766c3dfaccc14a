//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kundli_vedic::Graha;

/// Errors surfaced by the external astronomical oracles.
///
/// The legacy behavior of silently defaulting a failed position to 0 deg is
/// deliberately not reproduced: a failure here is typed and the caller
/// decides whether to retry, abort, or degrade.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum OracleError {
    /// The ephemeris returned an error status for a body.
    Ephemeris { body: Graha, status: i32 },
    /// House-cusp computation failed.
    Houses(String),
    /// Ayanamsa lookup failed.
    Ayanamsa(String),
}

impl Display for OracleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris { body, status } => {
                write!(f, "ephemeris error for {} (status {status})", body.name())
            }
            Self::Houses(msg) => write!(f, "house computation error: {msg}"),
            Self::Ayanamsa(msg) => write!(f, "ayanamsa error: {msg}"),
        }
    }
}

impl Error for OracleError {}

/// Errors from the chart pipeline.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// An oracle call failed.
    Oracle(OracleError),
    /// The house oracle returned no recognizable ascendant in any of the
    /// probed result shapes.
    AscendantUnresolved,
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Oracle(e) => write!(f, "oracle error: {e}"),
            Self::AscendantUnresolved => write!(f, "house oracle returned no ascendant"),
        }
    }
}

impl Error for ChartError {}

impl From<OracleError> for ChartError {
    fn from(e: OracleError) -> Self {
        Self::Oracle(e)
    }
}
