//! Tests for the structural subfield checks

use super::*;
use crate::models::{SubfieldRole, ValidationIssue};
use crate::validation::SubfieldValidator;

fn validator() -> SubfieldValidator {
    SubfieldValidator::new(&ValidationPolicy::default())
}

#[test]
fn test_valid_descriptor_converts_all_roles() {
    let report = validator().validate(&create_box_descriptor());

    assert!(report.is_valid());
    assert_eq!(report.subfields.len(), 4);
    assert!(report.subfields.iter().all(|s| s.structurally_valid));

    let geometry = report.geometry().unwrap();
    assert_close(geometry.west, 10.0);
    assert_close(geometry.east, 20.0);
    assert_close(geometry.north, 50.0);
    assert_close(geometry.south, 40.0);
}

#[test]
fn test_subfields_reported_in_role_order() {
    let report = validator().validate(&create_point_descriptor());
    let roles: Vec<SubfieldRole> = report.subfields.iter().map(|s| s.role).collect();
    assert_eq!(roles, SubfieldRole::ALL.to_vec());
}

#[test]
fn test_absent_subfield() {
    let field = DescriptorField::from_subfields([
        ('d', "E0150000"),
        ('e', "E0150000"),
        ('f', "N0500000"),
    ]);
    let report = validator().validate(&field);

    assert_eq!(
        report.issues,
        vec![ValidationIssue::Absent {
            role: SubfieldRole::SouthLatitude
        }]
    );
    assert!(report.geometry().is_none());
    // The other roles still converted on their own
    assert!(
        report
            .subfield(SubfieldRole::WestLongitude)
            .unwrap()
            .decimal
            .is_some()
    );
}

#[test]
fn test_repeated_subfield_skips_lexical_checks() {
    let field = DescriptorField::from_subfields([
        ('d', "E0150000"),
        ('d', "bad"),
        ('e', "E0150000"),
        ('f', "N0500000"),
        ('g', "N0500000"),
    ]);
    let report = validator().validate(&field);

    assert_eq!(
        report.issues,
        vec![ValidationIssue::Repeated {
            role: SubfieldRole::WestLongitude,
            count: 2
        }]
    );
    let west = report.subfield(SubfieldRole::WestLongitude).unwrap();
    assert_eq!(west.raw_values.len(), 2);
    assert!(!west.structurally_valid);
    assert!(west.decimal.is_none());
}

#[test]
fn test_short_latitude_rejected() {
    let report = validator().validate(&create_descriptor(
        "E0150000", "E0150000", "N470000", "N0500000",
    ));

    assert_eq!(
        report.issues,
        vec![ValidationIssue::WrongLength {
            role: SubfieldRole::NorthLatitude,
            raw: "N470000".to_string(),
            expected: 8,
            found: 7,
        }]
    );
    assert!(report.geometry().is_none());
}

#[test]
fn test_decimal_value_accumulates_issues() {
    let issues = validator().lexical_issues(SubfieldRole::WestLongitude, "E15.5000");

    assert_eq!(
        issues,
        vec![
            ValidationIssue::DecimalNotation {
                role: SubfieldRole::WestLongitude,
                raw: "E15.5000".to_string(),
            },
            ValidationIssue::NonDigitBody {
                role: SubfieldRole::WestLongitude,
                raw: "E15.5000".to_string(),
            },
        ]
    );
}

#[test]
fn test_latitude_letter_on_longitude_role() {
    let issues = validator().lexical_issues(SubfieldRole::EastLongitude, "N0150000");
    assert_eq!(
        issues,
        vec![ValidationIssue::WrongHemisphere {
            role: SubfieldRole::EastLongitude,
            raw: "N0150000".to_string(),
        }]
    );
    assert!(issues[0].to_string().contains("E or W (longitude)"));
}

#[test]
fn test_longitude_letter_on_latitude_role() {
    let issues = validator().lexical_issues(SubfieldRole::SouthLatitude, "W0150000");
    assert_eq!(issues.len(), 1);
    assert!(issues[0].to_string().contains("N or S (latitude)"));
}

#[test]
fn test_lowercase_hemisphere_rejected() {
    let issues = validator().lexical_issues(SubfieldRole::NorthLatitude, "n0500000");
    assert!(matches!(
        issues.as_slice(),
        [ValidationIssue::WrongHemisphere { .. }]
    ));
}

#[test]
fn test_empty_value_collects_every_issue() {
    let issues = validator().lexical_issues(SubfieldRole::WestLongitude, "");
    assert_eq!(issues.len(), 3);
    assert!(matches!(issues[0], ValidationIssue::WrongLength { found: 0, .. }));
    assert!(matches!(issues[1], ValidationIssue::WrongHemisphere { .. }));
    assert!(matches!(issues[2], ValidationIssue::NonDigitBody { .. }));
}

#[test]
fn test_length_counts_characters_not_bytes() {
    let issues = validator().lexical_issues(SubfieldRole::WestLongitude, "E015000ó");
    assert!(
        !issues
            .iter()
            .any(|i| matches!(i, ValidationIssue::WrongLength { .. }))
    );
    assert!(matches!(
        issues.as_slice(),
        [ValidationIssue::NonDigitBody { .. }]
    ));
}

#[test]
fn test_minutes_above_59_accepted_by_default() {
    let report = validator().validate(&create_descriptor(
        "E0157500", "E0157500", "N0500000", "N0500000",
    ));
    assert!(report.is_valid());
    assert_close(report.geometry().unwrap().west, 16.25);
}

#[test]
fn test_minutes_above_59_rejected_when_bounded() {
    let validator = SubfieldValidator::new(&create_strict_policy());
    let report = validator.validate(&create_descriptor(
        "E0157500", "E0157500", "N0500060", "N0500000",
    ));

    let roles: Vec<SubfieldRole> = report
        .issues
        .iter()
        .map(|issue| match issue {
            ValidationIssue::MinutesSecondsOutOfRange { role, .. } => *role,
            other => panic!("Unexpected issue {other:?}"),
        })
        .collect();
    assert_eq!(
        roles,
        vec![
            SubfieldRole::WestLongitude,
            SubfieldRole::EastLongitude,
            SubfieldRole::NorthLatitude,
        ]
    );
    assert!(report.geometry().is_none());
}

#[test]
fn test_issue_order_follows_roles() {
    let field = DescriptorField::from_subfields([('e', "X"), ('g', "S0100000"), ('g', "S0100000")]);
    let report = validator().validate(&field);

    assert!(matches!(
        report.issues[0],
        ValidationIssue::Absent {
            role: SubfieldRole::WestLongitude
        }
    ));
    assert!(matches!(
        report.issues[1],
        ValidationIssue::WrongLength {
            role: SubfieldRole::EastLongitude,
            ..
        }
    ));
    assert!(report.issues.iter().all(ValidationIssue::is_structural));
    assert!(matches!(
        report.issues.last().unwrap(),
        ValidationIssue::Repeated {
            role: SubfieldRole::SouthLatitude,
            count: 2
        }
    ));
}
