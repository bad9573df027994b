//! Configuration management and validation.
//!
//! Provides the field tags the batch reads from each record, the validation
//! policy knobs, and where the error report is appended.

use crate::constants::{
    DEFAULT_REPORT_FILE, TAG_DESCRIPTOR, TAG_DISPLAY_NAME, TAG_PRIMARY_ID, TAG_SECONDARY_ID,
};
use crate::error::{Result, ValidatorError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Tags of the four context fields taken from each record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldTags {
    pub primary_id: String,
    pub secondary_id: String,
    pub display_name: String,
    pub descriptor: String,
}

impl Default for FieldTags {
    fn default() -> Self {
        Self {
            primary_id: TAG_PRIMARY_ID.to_string(),
            secondary_id: TAG_SECONDARY_ID.to_string(),
            display_name: TAG_DISPLAY_NAME.to_string(),
            descriptor: TAG_DESCRIPTOR.to_string(),
        }
    }
}

impl FieldTags {
    fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("primary_id", self.primary_id.as_str()),
            ("secondary_id", self.secondary_id.as_str()),
            ("display_name", self.display_name.as_str()),
            ("descriptor", self.descriptor.as_str()),
        ]
        .into_iter()
    }
}

/// Knobs that change what counts as invalid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// A non-point bounding box makes the record invalid, not just reported
    pub shape_warning_invalidates: bool,

    /// Reject minutes or seconds above 59 during the structural checks
    pub check_minute_second_bounds: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            shape_warning_invalidates: true,
            check_minute_second_bounds: false,
        }
    }
}

/// Top-level configuration for a validation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub tags: FieldTags,
    pub policy: ValidationPolicy,
    /// Append-only error report
    pub report_path: PathBuf,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            tags: FieldTags::default(),
            policy: ValidationPolicy::default(),
            report_path: PathBuf::from(DEFAULT_REPORT_FILE),
        }
    }
}

impl ValidatorConfig {
    /// Load a JSON configuration file; missing keys fall back to defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ValidatorError::configuration(format!(
                "Cannot read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self =
            serde_json::from_str(&contents).map_err(|source| ValidatorError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("Loaded configuration from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    /// Check tags are three ASCII digits and the report path is set
    pub fn validate(&self) -> Result<()> {
        for (name, tag) in self.tags.iter() {
            if tag.len() != 3 || !tag.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ValidatorError::configuration(format!(
                    "Tag for {name} must be three digits, got '{tag}'"
                )));
            }
        }

        if self.tags.descriptor.starts_with("00") {
            return Err(ValidatorError::configuration(format!(
                "Descriptor tag '{}' is a control field and has no subfields",
                self.tags.descriptor
            )));
        }

        if self.report_path.as_os_str().is_empty() {
            return Err(ValidatorError::configuration(
                "Report path cannot be empty",
            ));
        }

        Ok(())
    }

    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }
}
