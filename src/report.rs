//! Append-only error report.
//!
//! One block per invalid record: a tab-separated identifier line followed by
//! each message on its own indented line.

use crate::constants::REPORT_INDENT;
use crate::error::{Result, ValidatorError};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Report block for one invalid record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub primary_id: String,
    pub secondary_id: String,
    pub display_name: String,
    pub messages: Vec<String>,
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}\t{}\t{}",
            self.secondary_id, self.primary_id, self.display_name
        )?;
        let body = self
            .messages
            .iter()
            .map(|message| format!("{REPORT_INDENT}{message}"))
            .collect::<Vec<_>>()
            .join("\n");
        writeln!(f, "{body}")
    }
}

/// Destination for report entries
pub trait ReportSink {
    /// Write one whole entry; it must be durable when this returns
    fn append(&mut self, entry: &ReportEntry) -> Result<()>;
}

/// File sink in append mode
///
/// The file is created or opened on the first entry, so a run without
/// invalid records leaves no report behind.
#[derive(Debug)]
pub struct FileReportSink {
    path: PathBuf,
    file: Option<File>,
    entries_written: usize,
}

impl FileReportSink {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            file: None,
            entries_written: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries_written(&self) -> usize {
        self.entries_written
    }
}

impl ReportSink for FileReportSink {
    fn append(&mut self, entry: &ReportEntry) -> Result<()> {
        if self.file.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .map_err(|source| ValidatorError::Report {
                    path: self.path.clone(),
                    source,
                })?;
            debug!("Appending error report to {}", self.path.display());
            self.file = Some(file);
        }

        let block = entry.to_string();
        if let Some(file) = self.file.as_mut() {
            file.write_all(block.as_bytes())
                .and_then(|_| file.flush())
                .map_err(|source| ValidatorError::Report {
                    path: self.path.clone(),
                    source,
                })?;
        }
        self.entries_written += 1;
        Ok(())
    }
}

/// In-memory sink keeping rendered blocks
#[derive(Debug, Clone, Default)]
pub struct MemoryReportSink {
    pub entries: Vec<ReportEntry>,
}

impl MemoryReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything a file sink would contain
    pub fn contents(&self) -> String {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl ReportSink for MemoryReportSink {
    fn append(&mut self, entry: &ReportEntry) -> Result<()> {
        self.entries.push(entry.clone());
        Ok(())
    }
}
