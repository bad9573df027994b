//! Error handling for descriptor validation runs.
//!
//! Validation findings are never errors: they are collected as
//! [`ValidationIssue`](crate::models::ValidationIssue)s. The types here cover
//! the input stream, the report sink and configuration.

use mrrc::MarcError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Cannot read input {path}: {reason}")]
    UnreadableInput { path: PathBuf, reason: String },

    #[error("Record stream unreadable at record {index}: {source}")]
    UnreadableStream {
        index: usize,
        #[source]
        source: MarcError,
    },

    #[error("Malformed record {index}: {source}")]
    MalformedRecord {
        index: usize,
        #[source]
        source: MarcError,
    },

    #[error("Malformed coordinate <<{raw}>>: {reason}")]
    MalformedCoordinate { raw: String, reason: String },

    #[error("Failed to write error report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Failed to parse configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ValidatorError {
    /// Whether the batch has to stop.
    ///
    /// A malformed record is skipped and counted; everything else means the
    /// input or the report can no longer be trusted.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ValidatorError::MalformedRecord { .. })
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Classify a decoder failure on the `index`-th record of a stream
    ///
    /// Failures inside the record body leave the stream positioned at the
    /// next record, so they are recoverable. Leader, I/O and error-cap
    /// failures are not.
    pub fn from_marc(index: usize, source: MarcError) -> Self {
        let recoverable = matches!(
            source,
            MarcError::DirectoryInvalid { .. }
                | MarcError::TruncatedRecord { .. }
                | MarcError::EndOfRecordNotFound { .. }
                | MarcError::InvalidIndicator { .. }
                | MarcError::BadSubfieldCode { .. }
                | MarcError::InvalidField { .. }
                | MarcError::EncodingError { .. }
        );
        if recoverable {
            Self::MalformedRecord { index, source }
        } else {
            Self::UnreadableStream { index, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidatorError>;
