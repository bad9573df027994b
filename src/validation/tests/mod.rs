//! Tests for the validation stages
//!
//! Shared fixtures for subfield, geometry and evaluator tests.

pub mod subfield_tests;

use crate::config::ValidationPolicy;
use crate::models::DescriptorField;
use crate::validation::RecordContext;

/// Descriptor with one value per role
pub fn create_descriptor(d: &str, e: &str, f: &str, g: &str) -> DescriptorField {
    DescriptorField::from_subfields([('d', d), ('e', e), ('f', f), ('g', g)])
}

/// A true point at 15.0E, 50.0N
pub fn create_point_descriptor() -> DescriptorField {
    create_descriptor("E0150000", "E0150000", "N0500000", "N0500000")
}

/// A valid box from 10E to 20E, 40N to 50N
pub fn create_box_descriptor() -> DescriptorField {
    create_descriptor("E0100000", "E0200000", "N0500000", "N0400000")
}

pub fn create_test_context() -> RecordContext {
    RecordContext::new("n2004123456", "b0000001234567", "Poznań (Poland)")
}

/// Policy where a non-point shape is reported but does not invalidate
pub fn create_lenient_policy() -> ValidationPolicy {
    ValidationPolicy {
        shape_warning_invalidates: false,
        check_minute_second_bounds: false,
    }
}

/// Policy that also bounds minutes and seconds
pub fn create_strict_policy() -> ValidationPolicy {
    ValidationPolicy {
        shape_warning_invalidates: true,
        check_minute_second_bounds: true,
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
