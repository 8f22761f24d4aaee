//! Test helpers for the trip record parser


use super::parser::{ParsedTrip, parse_trip_line};

/// Parse a line that is expected to be accepted, panicking otherwise
pub fn must_parse(line: &str) -> ParsedTrip<'_> {
    parse_trip_line(line)
        .unwrap_or_else(|| panic!("line should have been accepted: {:?}", line))
}

/// Assert that a line is rejected
pub fn assert_rejected(line: &str) {
    assert!(
        parse_trip_line(line).is_none(),
        "line should have been rejected: {:?}",
        line
    );
}
