//! Command-line argument definitions for the trip analyzer
//!
//! Defines the complete CLI interface using the clap derive API.

use crate::constants::{DEFAULT_TOP_SLOTS, DEFAULT_TOP_ZONES};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the trip analyzer
///
/// Ranks pickup-zone activity from large delimited trip-record files.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "trip-analyzer",
    version,
    about = "Rank the busiest pickup zones and (zone, hour) slots in a trip-record file",
    long_about = "Ingests a delimited trip-record file in a single strict pass, silently \
                  dropping malformed rows, and produces two exact ranked reports: the \
                  busiest pickup zones and the busiest (zone, hour-of-day) slots. \
                  Tie-breaking is deterministic, so identical inputs always produce \
                  identical reports."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the trip analyzer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Ingest a trip file and print the ranked activity reports
    Analyze(AnalyzeArgs),
    /// Validate a trip file and report acceptance statistics only
    Check(CheckArgs),
}

/// Arguments for the analyze command (main report generation)
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// Input trip-record file (comma-delimited, six fields per row)
    #[arg(value_name = "FILE", help = "Path to the trip-record file")]
    pub input: PathBuf,

    /// Number of entries in the busiest-zones report
    #[arg(
        long = "top-zones",
        value_name = "K",
        default_value_t = DEFAULT_TOP_ZONES,
        help = "Number of zones in the busiest-zones report"
    )]
    pub top_zones: usize,

    /// Number of entries in the busiest-slots report
    #[arg(
        long = "top-slots",
        value_name = "K",
        default_value_t = DEFAULT_TOP_SLOTS,
        help = "Number of (zone, hour) slots in the busiest-slots report"
    )]
    pub top_slots: usize,

    /// Output format for the reports
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the reports"
    )]
    pub output_format: OutputFormat,

    /// Output file for the reports
    ///
    /// If not specified, reports go to stdout.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the reports"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging and the progress spinner",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the check command (validation-only pass)
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Input trip-record file
    #[arg(value_name = "FILE", help = "Path to the trip-record file")]
    pub input: PathBuf,

    /// Output format for the statistics
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the acceptance statistics"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for reports and statistics
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl AnalyzeArgs {
    /// Validate the analyze command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.input)?;

        // Validate output file directory exists if specified
        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            log_level_for(self.verbose)
        }
    }

    /// Check if we should show the progress spinner (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl CheckArgs {
    /// Validate the check command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.input)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level_for(self.verbose)
    }
}

fn log_level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn validate_input_file(input: &PathBuf) -> Result<()> {
    if !input.exists() {
        return Err(Error::configuration(format!(
            "Input file does not exist: {}",
            input.display()
        )));
    }
    if !input.is_file() {
        return Err(Error::configuration(format!(
            "Input path is not a file: {}",
            input.display()
        )));
    }
    Ok(())
}
