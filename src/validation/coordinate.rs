//! Sexagesimal coordinate conversion
//!
//! Converts the fixed `hdddmmss` encoding into signed decimal degrees.

use crate::constants::COORDINATE_LENGTH;
use crate::error::{Result, ValidatorError};

/// The four groups of an `hdddmmss` coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DmsParts {
    pub hemisphere: char,
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl DmsParts {
    /// Slice `raw` into hemisphere, degrees, minutes and seconds
    ///
    /// Only checks what slicing needs. Group magnitudes are not bounded, so
    /// `N0007500` splits into 75 minutes.
    pub fn split(raw: &str) -> Result<Self> {
        let malformed = |reason: &str| ValidatorError::MalformedCoordinate {
            raw: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.len() != COORDINATE_LENGTH {
            return Err(malformed("expected 8 bytes"));
        }

        let hemisphere = raw
            .chars()
            .next()
            .ok_or_else(|| malformed("empty coordinate"))?;

        let group = |range: std::ops::Range<usize>| -> Result<u32> {
            raw.get(range)
                .filter(|digits| digits.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|digits| digits.parse().ok())
                .ok_or_else(|| malformed("non-digit group"))
        };

        Ok(Self {
            hemisphere,
            degrees: group(1..4)?,
            minutes: group(4..6)?,
            seconds: group(6..8)?,
        })
    }

    pub fn sign(&self) -> Option<f64> {
        match self.hemisphere {
            'N' | 'E' => Some(1.0),
            'S' | 'W' => Some(-1.0),
            _ => None,
        }
    }
}

/// Convert a structurally valid coordinate to decimal degrees
///
/// South and west are negative. Callers are expected to run the subfield
/// checks first; this function rejects only input it cannot slice or whose
/// first letter is not a hemisphere.
pub fn parse_dms(raw: &str) -> Result<f64> {
    let parts = DmsParts::split(raw)?;
    let sign = parts.sign().ok_or_else(|| ValidatorError::MalformedCoordinate {
        raw: raw.to_string(),
        reason: format!("unknown hemisphere '{}'", parts.hemisphere),
    })?;

    let degrees = f64::from(parts.degrees)
        + f64::from(parts.minutes) / 60.0
        + f64::from(parts.seconds) / 3600.0;

    Ok(degrees * sign)
}
