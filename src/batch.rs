//! Batch driver over a stream of authority records.
//!
//! Pulls the context fields and the descriptor field out of each record,
//! evaluates records that carry all of them, and accumulates the
//! valid/invalid counts returned in a [`BatchSummary`].

use crate::config::{FieldTags, ValidatorConfig};
use crate::error::Result;
use crate::marc::{FieldAccess, RecordStream};
use crate::models::{BatchStatistics, BatchSummary, DescriptorField};
use crate::report::{FileReportSink, ReportSink};
use crate::validation::{RecordContext, RecordEvaluator};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Spinner counting records as they are evaluated
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        let progress_bar = enabled.then(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} [{elapsed_precise}] {pos} records | {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        Self { progress_bar }
    }

    pub fn disabled() -> Self {
        Self { progress_bar: None }
    }

    /// Advance by one record and refresh the counters
    pub fn record_done(&self, stats: &BatchStatistics) {
        if let Some(ref pb) = self.progress_bar {
            pb.inc(1);
            pb.set_message(format!(
                "{} valid, {} invalid",
                stats.valid_count, stats.invalid_count
            ));
        }
    }

    pub fn finish(&self, summary: &BatchSummary) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_with_message(format!(
                "Completed: {} valid, {} invalid",
                summary.valid_count(),
                summary.invalid_count()
            ));
        }
    }

    pub fn abandon(&self, reason: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.abandon_with_message(format!("Failed: {reason}"));
        }
    }
}

/// Drives one validation pass over a record stream
pub struct BatchDriver {
    tags: FieldTags,
    evaluator: RecordEvaluator,
    progress: ProgressReporter,
}

impl BatchDriver {
    pub fn new(config: &ValidatorConfig) -> Self {
        Self {
            tags: config.tags.clone(),
            evaluator: RecordEvaluator::new(&config.policy),
            progress: ProgressReporter::disabled(),
        }
    }

    pub fn with_progress(mut self, progress: ProgressReporter) -> Self {
        self.progress = progress;
        self
    }

    /// Context and descriptor of a record, or `None` when any is missing
    pub fn extract<R: FieldAccess>(&self, record: &R) -> Option<(RecordContext, DescriptorField)> {
        let present = |value: Option<String>| value.filter(|v| !v.is_empty());

        let primary_id = present(record.field_value(&self.tags.primary_id))?;
        let secondary_id = present(record.field_value(&self.tags.secondary_id))?;
        let display_name = present(record.field_value(&self.tags.display_name))?;
        let subfields = record.subfields(&self.tags.descriptor)?;

        Some((
            RecordContext {
                primary_id,
                secondary_id,
                display_name,
            },
            DescriptorField::from_subfields(subfields),
        ))
    }

    /// Evaluate every record from `records`, reporting invalid ones to `sink`
    ///
    /// Malformed records are counted and skipped. A fatal source error or a
    /// failed report write stops the batch.
    pub fn run<I, R>(&self, records: I, sink: &mut dyn ReportSink) -> Result<BatchSummary>
    where
        I: IntoIterator<Item = Result<R>>,
        R: FieldAccess,
    {
        let started_at = Utc::now();
        let mut stats = BatchStatistics::new();

        for item in records {
            let record = match item {
                Ok(record) => record,
                Err(error) if !error.is_fatal() => {
                    warn!("Skipping record: {}", error);
                    stats.records_malformed += 1;
                    continue;
                }
                Err(error) => {
                    self.progress.abandon(&error.to_string());
                    return Err(error);
                }
            };
            stats.records_read += 1;

            let Some((context, descriptor)) = self.extract(&record) else {
                debug!("Record {} lacks a required field", stats.records_read);
                stats.records_skipped += 1;
                continue;
            };

            let outcome = match self.evaluator.evaluate(&context, &descriptor, sink) {
                Ok(outcome) => outcome,
                Err(error) => {
                    self.progress.abandon(&error.to_string());
                    return Err(error);
                }
            };
            stats.record_verdict(outcome.is_valid);
            self.progress.record_done(&stats);
        }

        let summary = BatchSummary::new(stats, started_at, Utc::now());
        if summary.statistics.evaluated() == 0 {
            warn!("No record carried the context fields and a descriptor");
        } else if summary.ratio.is_none() {
            warn!("No valid records, invalid/valid ratio is undefined");
        }
        info!("{}", summary.summary());
        self.progress.finish(&summary);

        Ok(summary)
    }

    /// Validate a MARC file, appending invalid records to the configured report
    ///
    /// The report file is opened on the first invalid record and closed when
    /// the run ends.
    pub fn run_file(&self, input: &Path, report_path: &Path) -> Result<BatchSummary> {
        info!("Validating descriptors in {}", input.display());
        let records = RecordStream::open(input)?;
        let mut sink = FileReportSink::new(report_path);

        let summary = self.run(records, &mut sink)?;
        info!(
            "Wrote {} report entries to {}",
            sink.entries_written(),
            sink.path().display()
        );
        Ok(summary)
    }
}
