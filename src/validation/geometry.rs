//! Range, bounding-box and shape checks on converted coordinates
//!
//! All checks run regardless of earlier failures.

use crate::models::{GeometryResult, SubfieldRole, ValidationIssue};

/// Issues found on a converted bounding box, in check order
pub fn check_geometry(geometry: &GeometryResult) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for role in SubfieldRole::ALL {
        let value = geometry.value(role);
        let (min, max) = role.bounds();
        if !(min..=max).contains(&value) {
            issues.push(ValidationIssue::OutOfRange {
                role,
                min,
                max,
                value,
            });
        }
    }

    if geometry.west > geometry.east {
        issues.push(ValidationIssue::LongitudeOrder {
            west: geometry.west,
            east: geometry.east,
        });
    }

    if geometry.north < geometry.south {
        issues.push(ValidationIssue::LatitudeOrder {
            north: geometry.north,
            south: geometry.south,
        });
    }

    if !geometry.is_point() {
        issues.push(ValidationIssue::NotAPoint {
            geometry: *geometry,
        });
    }

    issues
}
