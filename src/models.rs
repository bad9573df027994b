//! Core data structures for descriptor validation.
//!
//! Defines the four coordinate subfield roles, the descriptor field they live
//! in, validation issues and outcomes, and the batch statistics returned to
//! the caller.

use crate::constants::{
    LATITUDE_HEMISPHERES, LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_HEMISPHERES, LONGITUDE_MAX,
    LONGITUDE_MIN,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a coordinate inside the descriptor field (MARC 034 $d $e $f $g)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubfieldRole {
    /// $d - westernmost longitude
    WestLongitude,
    /// $e - easternmost longitude
    EastLongitude,
    /// $f - northernmost latitude
    NorthLatitude,
    /// $g - southernmost latitude
    SouthLatitude,
}

impl SubfieldRole {
    /// Roles in the order they are checked and reported
    pub const ALL: [SubfieldRole; 4] = [
        SubfieldRole::WestLongitude,
        SubfieldRole::EastLongitude,
        SubfieldRole::NorthLatitude,
        SubfieldRole::SouthLatitude,
    ];

    /// Subfield code on the record
    pub fn code(&self) -> char {
        match self {
            SubfieldRole::WestLongitude => 'd',
            SubfieldRole::EastLongitude => 'e',
            SubfieldRole::NorthLatitude => 'f',
            SubfieldRole::SouthLatitude => 'g',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        SubfieldRole::ALL.into_iter().find(|role| role.code() == code)
    }

    pub fn is_longitude(&self) -> bool {
        matches!(
            self,
            SubfieldRole::WestLongitude | SubfieldRole::EastLongitude
        )
    }

    /// Hemisphere letters a value for this role may start with
    pub fn hemispheres(&self) -> &'static [char] {
        if self.is_longitude() {
            LONGITUDE_HEMISPHERES
        } else {
            LATITUDE_HEMISPHERES
        }
    }

    /// Inclusive decimal-degree bounds
    pub fn bounds(&self) -> (f64, f64) {
        if self.is_longitude() {
            (LONGITUDE_MIN, LONGITUDE_MAX)
        } else {
            (LATITUDE_MIN, LATITUDE_MAX)
        }
    }

    fn index(&self) -> usize {
        match self {
            SubfieldRole::WestLongitude => 0,
            SubfieldRole::EastLongitude => 1,
            SubfieldRole::NorthLatitude => 2,
            SubfieldRole::SouthLatitude => 3,
        }
    }
}

impl fmt::Display for SubfieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Raw coordinate values found on one descriptor field, grouped by role
///
/// Subfields with other codes are ignored. Every occurrence is kept so that
/// repeated subfields can be reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescriptorField {
    values: [Vec<String>; 4],
}

impl DescriptorField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(code, value)` pairs in record order
    pub fn from_subfields<I, S>(subfields: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let mut field = Self::new();
        for (code, value) in subfields {
            if let Some(role) = SubfieldRole::from_code(code) {
                field.push(role, value);
            }
        }
        field
    }

    pub fn push(&mut self, role: SubfieldRole, value: impl Into<String>) {
        self.values[role.index()].push(value.into());
    }

    /// All raw values recorded under `role`
    pub fn values(&self, role: SubfieldRole) -> &[String] {
        &self.values[role.index()]
    }
}

/// Verdict for one role after the structural checks
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSubfield {
    pub role: SubfieldRole,
    pub raw_values: Vec<String>,
    pub structurally_valid: bool,
    /// Present only when the value passed every structural check
    pub decimal: Option<f64>,
}

/// Decimal-degree bounding box once all four subfields converted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryResult {
    pub west: f64,
    pub east: f64,
    pub north: f64,
    pub south: f64,
}

impl GeometryResult {
    pub fn value(&self, role: SubfieldRole) -> f64 {
        match role {
            SubfieldRole::WestLongitude => self.west,
            SubfieldRole::EastLongitude => self.east,
            SubfieldRole::NorthLatitude => self.north,
            SubfieldRole::SouthLatitude => self.south,
        }
    }

    /// Both longitudes and both latitudes coincide
    pub fn is_point(&self) -> bool {
        self.west == self.east && self.north == self.south
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

/// One finding about a descriptor field
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    Absent {
        role: SubfieldRole,
    },
    Repeated {
        role: SubfieldRole,
        count: usize,
    },
    DecimalNotation {
        role: SubfieldRole,
        raw: String,
    },
    WrongLength {
        role: SubfieldRole,
        raw: String,
        expected: usize,
        found: usize,
    },
    WrongHemisphere {
        role: SubfieldRole,
        raw: String,
    },
    NonDigitBody {
        role: SubfieldRole,
        raw: String,
    },
    MinutesSecondsOutOfRange {
        role: SubfieldRole,
        raw: String,
    },
    OutOfRange {
        role: SubfieldRole,
        min: f64,
        max: f64,
        value: f64,
    },
    LongitudeOrder {
        west: f64,
        east: f64,
    },
    LatitudeOrder {
        north: f64,
        south: f64,
    },
    NotAPoint {
        geometry: GeometryResult,
    },
}

impl ValidationIssue {
    pub fn severity(&self) -> Severity {
        match self {
            ValidationIssue::NotAPoint { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Raised before decimal conversion
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ValidationIssue::Absent { .. }
                | ValidationIssue::Repeated { .. }
                | ValidationIssue::DecimalNotation { .. }
                | ValidationIssue::WrongLength { .. }
                | ValidationIssue::WrongHemisphere { .. }
                | ValidationIssue::NonDigitBody { .. }
                | ValidationIssue::MinutesSecondsOutOfRange { .. }
        )
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::Absent { role } => {
                write!(f, "Problem with subfield {role} - not present.")
            }
            ValidationIssue::Repeated { role, count } => write!(
                f,
                "Problem with subfield {role} - occurs {count} times, expected once."
            ),
            ValidationIssue::DecimalNotation { role, raw } => write!(
                f,
                "Problem with subfield {role} - looks like decimal degrees already - <<{raw}>>."
            ),
            ValidationIssue::WrongLength {
                role,
                raw,
                expected,
                found,
            } => write!(
                f,
                "Problem with subfield {role} - wrong length, should be {expected} but is {found} - <<{raw}>>."
            ),
            ValidationIssue::WrongHemisphere { role, raw } => {
                let (letters, axis) = if role.is_longitude() {
                    ("E or W", "longitude")
                } else {
                    ("N or S", "latitude")
                };
                write!(
                    f,
                    "Problem with subfield {role} - should start with {letters} ({axis}), found <<{raw}>>."
                )
            }
            ValidationIssue::NonDigitBody { role, raw } => write!(
                f,
                "Problem with subfield {role} - contains characters other than digits after the hemisphere letter: <<{raw}>>."
            ),
            ValidationIssue::MinutesSecondsOutOfRange { role, raw } => write!(
                f,
                "Problem with subfield {role} - minutes or seconds greater than 59: <<{raw}>>."
            ),
            ValidationIssue::OutOfRange {
                role,
                min,
                max,
                value,
            } => write!(
                f,
                "Problem with subfield {role} - value out of range, should be between {min:?} and {max:?} but is {value:?}."
            ),
            ValidationIssue::LongitudeOrder { west, east } => write!(
                f,
                "Problem with subfields d and e - d should be less than or equal to e, found d={west:?} e={east:?}."
            ),
            ValidationIssue::LatitudeOrder { north, south } => write!(
                f,
                "Problem with subfields f and g - f should be greater than or equal to g, found f={north:?} g={south:?}."
            ),
            ValidationIssue::NotAPoint { geometry } => write!(
                f,
                "Warning: this is not a point but another shape (rectangle, triangle or line). Is that intended? - d={:?}, e={:?}, f={:?}, g={:?}.",
                geometry.west, geometry.east, geometry.north, geometry.south
            ),
        }
    }
}

/// Result of validating one descriptor field
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    /// Findings in the order the checks ran
    pub issues: Vec<ValidationIssue>,
    /// Set when all four subfields converted to decimal degrees
    pub geometry: Option<GeometryResult>,
}

impl ValidationOutcome {
    /// Rendered messages, one per issue
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity() == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity() == Severity::Warning)
    }
}

/// Counters accumulated over one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStatistics {
    /// Records decoded from the source
    pub records_read: usize,
    /// Records lacking an identifier, the name or the descriptor field
    pub records_skipped: usize,
    /// Records the decoder could not parse
    pub records_malformed: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
}

impl BatchStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one evaluated record
    pub fn record_verdict(&mut self, is_valid: bool) {
        if is_valid {
            self.valid_count += 1;
        } else {
            self.invalid_count += 1;
        }
    }

    pub fn evaluated(&self) -> usize {
        self.valid_count + self.invalid_count
    }

    /// Invalid to valid ratio, undefined without any valid record
    pub fn ratio(&self) -> Option<f64> {
        if self.valid_count == 0 {
            None
        } else {
            Some(self.invalid_count as f64 / self.valid_count as f64)
        }
    }
}

/// Final result of a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub statistics: BatchStatistics,
    /// `None` when no record was valid
    pub ratio: Option<f64>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl BatchSummary {
    pub fn new(
        statistics: BatchStatistics,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        Self {
            ratio: statistics.ratio(),
            statistics,
            started_at,
            finished_at,
        }
    }

    pub fn valid_count(&self) -> usize {
        self.statistics.valid_count
    }

    pub fn invalid_count(&self) -> usize {
        self.statistics.invalid_count
    }

    pub fn ratio_display(&self) -> String {
        match self.ratio {
            Some(ratio) => format!("{ratio}"),
            None => "undefined".to_string(),
        }
    }

    /// `(valid, invalid, ratio)` triple
    pub fn triple(&self) -> (usize, usize, Option<f64>) {
        (self.valid_count(), self.invalid_count(), self.ratio)
    }

    pub fn summary(&self) -> String {
        format!(
            "Validation Summary: {} records read | {} valid | {} invalid | ratio {} | \
             skipped {} | malformed {}",
            self.statistics.records_read,
            self.statistics.valid_count,
            self.statistics.invalid_count,
            self.ratio_display(),
            self.statistics.records_skipped,
            self.statistics.records_malformed
        )
    }
}
