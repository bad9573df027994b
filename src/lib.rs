//! Geographic Descriptor Validator Library
//!
//! Checks the coded coordinates of MARC authority records (field 034,
//! subfields `$d $e $f $g` in `hdddmmss` form) and reports records whose
//! descriptors are malformed or geometrically inconsistent.
//!
//! This library provides tools for:
//! - Decoding ISO 2709 record streams
//! - Structural checks on each coordinate subfield
//! - Conversion of sexagesimal coordinates to decimal degrees
//! - Range, bounding-box and point checks on converted coordinates
//! - An append-only error report and batch statistics

pub mod batch;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod marc;
pub mod models;
pub mod report;
pub mod validation;

// Re-export commonly used types
pub use batch::BatchDriver;
pub use config::{ValidationPolicy, ValidatorConfig};
pub use error::{Result, ValidatorError};
pub use models::{BatchSummary, DescriptorField, ValidationIssue, ValidationOutcome};
pub use validation::{RecordContext, RecordEvaluator, parse_dms};
