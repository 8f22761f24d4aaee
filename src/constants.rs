//! Application constants for the trip analyzer
//!
//! This module contains the record-format constants and default values
//! used throughout the application.

// =============================================================================
// Trip Record Format
// =============================================================================

/// Header token that marks a non-data line at the top of a trip file
pub const HEADER_TOKEN: &str = "TripID";

/// Number of comma separators a well-formed trip record must contain
///
/// Records carry six fields (trip id, pickup zone, dropoff zone, pickup
/// timestamp, distance, fare); only the first, second, and fourth gate
/// acceptance.
pub const REQUIRED_COMMAS: usize = 5;

/// Hours in a day; length of every per-zone hourly histogram
pub const HOURS_PER_DAY: usize = 24;

// =============================================================================
// Report Defaults
// =============================================================================

/// Default number of entries in the busiest-zones report
pub const DEFAULT_TOP_ZONES: usize = 10;

/// Default number of entries in the busiest-slots report
pub const DEFAULT_TOP_SLOTS: usize = 10;
