//! Command-line interface components.

use crate::batch::{BatchDriver, ProgressReporter};
use crate::config::ValidatorConfig;
use crate::models::BatchSummary;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::*;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug, Clone)]
#[command(name = "geodesc-validator")]
#[command(about = "Validate coded coordinates (MARC 034 $d$e$f$g) in authority records")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the MARC (ISO 2709) authority file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Error report to append invalid records to
    #[arg(short, long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report non-point shapes without counting the record as invalid
    #[arg(long)]
    pub allow_shapes: bool,

    /// Reject minutes or seconds greater than 59
    #[arg(long)]
    pub strict_minutes_seconds: bool,

    /// Format of the final summary
    #[arg(long, value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only show errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format for the batch summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn show_progress(&self) -> bool {
        !self.no_progress && !self.quiet
    }

    /// Defaults, then the config file, then command-line flags
    pub fn to_config(&self) -> Result<ValidatorConfig> {
        let mut config = match &self.config {
            Some(path) => ValidatorConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ValidatorConfig::default(),
        };

        if let Some(report) = &self.report {
            config.report_path = report.clone();
        }
        if self.allow_shapes {
            config.policy.shape_warning_invalidates = false;
        }
        if self.strict_minutes_seconds {
            config.policy.check_minute_second_bounds = true;
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("geodesc_validator={log_level}")));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Run one validation pass as described by `args`
pub fn run(args: &Args) -> Result<BatchSummary> {
    let config = args.to_config()?;
    debug!("Effective configuration: {:?}", config);

    let driver =
        BatchDriver::new(&config).with_progress(ProgressReporter::new(args.show_progress()));

    let summary = driver
        .run_file(&args.input, &config.report_path)
        .with_context(|| format!("Validation of {} failed", args.input.display()))?;

    print_summary(&summary, args.output_format, &config)?;
    Ok(summary)
}

fn print_summary(
    summary: &BatchSummary,
    format: OutputFormat,
    config: &ValidatorConfig,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(summary).context("Failed to serialize summary")?;
            println!("{json}");
        }
        OutputFormat::Human => {
            let stats = &summary.statistics;
            println!("{}", "Descriptor validation complete".bright_green().bold());
            println!(
                "  {} {}",
                "Valid:".bright_cyan(),
                stats.valid_count.to_string().bright_white().bold()
            );
            println!(
                "  {} {}",
                "Invalid:".bright_cyan(),
                stats.invalid_count.to_string().bright_white().bold()
            );
            let ratio = match summary.ratio {
                Some(ratio) => format!("{ratio:.4}").bright_white().bold(),
                None => "undefined (no valid records)".bright_yellow().bold(),
            };
            println!("  {} {}", "Invalid/valid ratio:".bright_cyan(), ratio);
            if stats.records_skipped > 0 || stats.records_malformed > 0 {
                println!(
                    "  {} {} without required fields, {} malformed",
                    "Skipped:".bright_cyan(),
                    stats.records_skipped,
                    stats.records_malformed
                );
            }
            if stats.invalid_count > 0 {
                println!(
                    "  {} {}",
                    "Report:".bright_cyan(),
                    config.report_path.display()
                );
            }
        }
    }
    Ok(())
}
