//! Strict single-pass parser for delimited trip records
//!
//! This module validates one raw text line at a time against the fixed trip
//! record grammar and, on success, yields the pickup zone together with the
//! hour component of the pickup timestamp. Every failure is a silent drop:
//! no error value leaves the parser, a rejected line simply contributes
//! nothing to the aggregate.
//!
//! ## Architecture
//!
//! - [`parser`] - Comma scanning, field boundary checks, and zone extraction
//! - [`timestamp`] - Hand-rolled pickup timestamp grammar
//! - [`stats`] - Per-pass ingestion statistics

pub mod parser;
pub mod stats;
pub mod timestamp;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{ParsedTrip, parse_trip_line};
pub use stats::IngestStats;
