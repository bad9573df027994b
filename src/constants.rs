//! Application constants for the descriptor validator
//!
//! MARC tags, subfield codes, the fixed coordinate encoding and the bounds
//! used by the geometry checks.

// =============================================================================
// Record Fields
// =============================================================================

/// Control number (primary identifier)
pub const TAG_PRIMARY_ID: &str = "001";

/// Secondary identifier, local system number
pub const TAG_SECONDARY_ID: &str = "009";

/// Heading - geographic name
pub const TAG_DISPLAY_NAME: &str = "151";

/// Coded cartographic mathematical data
pub const TAG_DESCRIPTOR: &str = "034";

// =============================================================================
// Coordinate Encoding
// =============================================================================

/// Length of an `hdddmmss` coordinate
pub const COORDINATE_LENGTH: usize = 8;

/// Hemisphere letters accepted for longitude subfields
pub const LONGITUDE_HEMISPHERES: &[char] = &['E', 'W'];

/// Hemisphere letters accepted for latitude subfields
pub const LATITUDE_HEMISPHERES: &[char] = &['N', 'S'];

/// Upper bound for minutes and seconds when the sexagesimal bounds check is on
pub const MAX_MINUTES_SECONDS: u32 = 59;

// =============================================================================
// Geometry Bounds
// =============================================================================

pub const LONGITUDE_MIN: f64 = -180.0;
pub const LONGITUDE_MAX: f64 = 180.0;
pub const LATITUDE_MIN: f64 = -90.0;
pub const LATITUDE_MAX: f64 = 90.0;

// =============================================================================
// Output
// =============================================================================

/// Default append-only error report
pub const DEFAULT_REPORT_FILE: &str = "geographical_descriptors_errors.txt";

/// Indentation of each message inside a report entry
pub const REPORT_INDENT: &str = "    ";
