//! Per-record orchestration of the validation stages
//!
//! Structural checks always run. Geometry checks run only when all four
//! subfields converted. An invalid record is written to the report sink.

use super::geometry::check_geometry;
use super::subfield::SubfieldValidator;
use crate::config::ValidationPolicy;
use crate::error::Result;
use crate::models::{DescriptorField, Severity, ValidationOutcome};
use crate::report::{ReportEntry, ReportSink};
use tracing::{debug, trace};

/// Identifying values printed on the first line of a report entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordContext {
    pub primary_id: String,
    pub secondary_id: String,
    pub display_name: String,
}

impl RecordContext {
    pub fn new(
        primary_id: impl Into<String>,
        secondary_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            primary_id: primary_id.into(),
            secondary_id: secondary_id.into(),
            display_name: display_name.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordEvaluator {
    subfields: SubfieldValidator,
    shape_warning_invalidates: bool,
}

impl RecordEvaluator {
    pub fn new(policy: &ValidationPolicy) -> Self {
        Self {
            subfields: SubfieldValidator::new(policy),
            shape_warning_invalidates: policy.shape_warning_invalidates,
        }
    }

    /// Run every check on `field` without side effects
    pub fn validate(&self, field: &DescriptorField) -> ValidationOutcome {
        let structural = self.subfields.validate(field);
        let geometry = structural.geometry();
        let mut issues = structural.issues;

        match geometry {
            Some(ref geometry) => {
                trace!("All four subfields converted, checking geometry");
                issues.extend(check_geometry(geometry));
            }
            None => trace!("Geometry checks skipped"),
        }

        let is_valid = issues.iter().all(|issue| match issue.severity() {
            Severity::Error => false,
            Severity::Warning => !self.shape_warning_invalidates,
        });

        ValidationOutcome {
            is_valid,
            issues,
            geometry,
        }
    }

    /// Validate one record and report it when invalid
    pub fn evaluate(
        &self,
        context: &RecordContext,
        field: &DescriptorField,
        sink: &mut dyn ReportSink,
    ) -> Result<ValidationOutcome> {
        let outcome = self.validate(field);

        if !outcome.is_valid {
            debug!(
                "Record {} invalid with {} issue(s)",
                context.primary_id,
                outcome.issues.len()
            );
            sink.append(&ReportEntry {
                primary_id: context.primary_id.clone(),
                secondary_id: context.secondary_id.clone(),
                display_name: context.display_name.clone(),
                messages: outcome.messages(),
            })?;
        }

        Ok(outcome)
    }
}
