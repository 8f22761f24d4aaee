//! Trip Analyzer Library
//!
//! A Rust library for turning large delimited trip-record files into ranked
//! pickup-zone activity reports.
//!
//! This library provides tools for:
//! - Strict single-pass validation of trip records with silent drop of
//!   malformed rows
//! - Accumulating per-zone trip totals and hour-of-day histograms
//! - Exact top-k selection of the busiest zones and the busiest
//!   (zone, hour) slots with deterministic tie-breaking
//! - A CLI front end with human, JSON, and CSV report output

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregate_store;
        pub mod analyzer;
        pub mod ranking;
        pub mod trip_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod report;
}

// Re-export commonly used types
pub use app::models::{SlotCount, ZoneCount, ZoneStats};
pub use app::services::analyzer::TripAnalyzer;
pub use config::Config;

/// Result type alias for the trip analyzer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for trip analyzer operations
///
/// Rejected trip records are deliberately absent here: a malformed row is
/// silently dropped during ingestion and never surfaces as an error. These
/// variants cover the outer surfaces only.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report serialization error
    #[error("Report output error: {message}")]
    ReportOutput {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Input file not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a report output error
    pub fn report_output(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::ReportOutput {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::ReportOutput {
            message: "JSON serialization failed".to_string(),
            source: Box::new(error),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::ReportOutput {
            message: "CSV serialization failed".to_string(),
            source: Box::new(error),
        }
    }
}
