//! Structural checks for the four coordinate subfields
//!
//! Every role is checked on every pass; a failure in one role never hides
//! findings in another. A value is converted to decimal degrees only after it
//! passed all of its own checks.

use super::coordinate::{DmsParts, parse_dms};
use crate::config::ValidationPolicy;
use crate::constants::{COORDINATE_LENGTH, MAX_MINUTES_SECONDS};
use crate::models::{
    CoordinateSubfield, DescriptorField, GeometryResult, SubfieldRole, ValidationIssue,
};
use tracing::trace;

/// Output of the structural pass over one descriptor field
#[derive(Debug, Clone, PartialEq)]
pub struct SubfieldReport {
    /// One entry per role, in check order
    pub subfields: Vec<CoordinateSubfield>,
    pub issues: Vec<ValidationIssue>,
}

impl SubfieldReport {
    /// No structural issue anywhere on the field
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn subfield(&self, role: SubfieldRole) -> Option<&CoordinateSubfield> {
        self.subfields.iter().find(|s| s.role == role)
    }

    /// Decimal values of all four roles
    ///
    /// Geometry checks need every subfield individually valid and the field
    /// as a whole free of structural issues, so a single bad role yields
    /// `None` even when the other three converted.
    pub fn geometry(&self) -> Option<GeometryResult> {
        if !self.is_valid() {
            return None;
        }
        let decimal = |role| self.subfield(role).and_then(|s| s.decimal);
        Some(GeometryResult {
            west: decimal(SubfieldRole::WestLongitude)?,
            east: decimal(SubfieldRole::EastLongitude)?,
            north: decimal(SubfieldRole::NorthLatitude)?,
            south: decimal(SubfieldRole::SouthLatitude)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubfieldValidator {
    check_minute_second_bounds: bool,
}

impl SubfieldValidator {
    pub fn new(policy: &ValidationPolicy) -> Self {
        Self {
            check_minute_second_bounds: policy.check_minute_second_bounds,
        }
    }

    pub fn validate(&self, field: &DescriptorField) -> SubfieldReport {
        let mut issues = Vec::new();
        let subfields = SubfieldRole::ALL
            .into_iter()
            .map(|role| self.check_role(role, field.values(role), &mut issues))
            .collect();

        SubfieldReport { subfields, issues }
    }

    fn check_role(
        &self,
        role: SubfieldRole,
        values: &[String],
        issues: &mut Vec<ValidationIssue>,
    ) -> CoordinateSubfield {
        let mut subfield = CoordinateSubfield {
            role,
            raw_values: values.to_vec(),
            structurally_valid: false,
            decimal: None,
        };

        let raw = match values {
            [] => {
                issues.push(ValidationIssue::Absent { role });
                return subfield;
            }
            [raw] => raw,
            _ => {
                issues.push(ValidationIssue::Repeated {
                    role,
                    count: values.len(),
                });
                return subfield;
            }
        };

        let mut found = self.lexical_issues(role, raw);
        subfield.structurally_valid = found.is_empty();

        if subfield.structurally_valid {
            // Lexically sound input always slices
            subfield.decimal = parse_dms(raw).ok();
            trace!("Subfield {} converted: {:?}", role, subfield.decimal);
        }

        issues.append(&mut found);
        subfield
    }

    /// Checks for a single occurrence, each reported independently
    pub fn lexical_issues(&self, role: SubfieldRole, raw: &str) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if raw.contains('.') {
            issues.push(ValidationIssue::DecimalNotation {
                role,
                raw: raw.to_string(),
            });
        }

        let length = raw.chars().count();
        if length != COORDINATE_LENGTH {
            issues.push(ValidationIssue::WrongLength {
                role,
                raw: raw.to_string(),
                expected: COORDINATE_LENGTH,
                found: length,
            });
        }

        let mut chars = raw.chars();
        let hemisphere_ok = chars
            .next()
            .is_some_and(|first| role.hemispheres().contains(&first));
        if !hemisphere_ok {
            issues.push(ValidationIssue::WrongHemisphere {
                role,
                raw: raw.to_string(),
            });
        }

        let body = chars.as_str();
        if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit()) {
            issues.push(ValidationIssue::NonDigitBody {
                role,
                raw: raw.to_string(),
            });
        }

        if issues.is_empty() && self.check_minute_second_bounds {
            let in_bounds = DmsParts::split(raw)
                .map(|parts| {
                    parts.minutes <= MAX_MINUTES_SECONDS && parts.seconds <= MAX_MINUTES_SECONDS
                })
                .unwrap_or(false);
            if !in_bounds {
                issues.push(ValidationIssue::MinutesSecondsOutOfRange {
                    role,
                    raw: raw.to_string(),
                });
            }
        }

        issues
    }
}
