//! Trip record line validation and field extraction
//!
//! A record carries six comma-delimited fields:
//! `trip id,pickup zone,dropoff zone,pickup timestamp,distance,fare`.
//! Only the trip id (well-formedness gate), the pickup zone, and the pickup
//! timestamp participate in validation; the remaining fields are ignored.

use super::timestamp::pickup_hour;
use crate::constants::{HEADER_TOKEN, REQUIRED_COMMAS};

/// Successfully validated trip record
///
/// The zone borrows from the input line; no allocation happens until the
/// caller decides to keep the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTrip<'a> {
    /// Pickup zone, trimmed, case preserved exactly
    pub zone: &'a str,

    /// Hour component of the pickup timestamp, 0-23
    pub hour: u8,
}

/// Validate one line and extract the pickup zone and hour
///
/// Returns `None` for every malformed, blank, or header line. A trailing
/// carriage return is stripped before validation, so the caller may hand
/// over lines from files with any line-ending convention.
pub fn parse_trip_line(line: &str) -> Option<ParsedTrip<'_>> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    // Skip leading spaces/tabs; an all-blank line carries no record
    let line = line.trim_start_matches([' ', '\t']);
    if line.is_empty() {
        return None;
    }

    // Header lines are not data
    if line.starts_with(HEADER_TOKEN) {
        return None;
    }

    // Locate the first five comma separators in one left-to-right scan
    let mut commas = [0usize; REQUIRED_COMMAS];
    let mut found = 0;
    for (index, byte) in line.bytes().enumerate() {
        if byte == b',' {
            commas[found] = index;
            found += 1;
            if found == REQUIRED_COMMAS {
                break;
            }
        }
    }
    if found < REQUIRED_COMMAS {
        return None;
    }

    // Field 0: trip id must be non-empty and all ASCII digits. The value
    // itself is discarded; its shape gates the row.
    let trip_id = &line[..commas[0]];
    if trip_id.is_empty() || !trip_id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Field 1: pickup zone, trimmed, case-sensitive, no normalization
    let zone = trim_field(&line[commas[0] + 1..commas[1]]);
    if zone.is_empty() {
        return None;
    }

    // Field 3: pickup timestamp
    let timestamp = trim_field(&line[commas[2] + 1..commas[3]]);
    let hour = pickup_hour(timestamp)?;

    Some(ParsedTrip { zone, hour })
}

/// Trim leading and trailing spaces/tabs from a field span
fn trim_field(field: &str) -> &str {
    field.trim_matches([' ', '\t'])
}
