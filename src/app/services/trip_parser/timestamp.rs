//! Pickup timestamp grammar
//!
//! Timestamps take the shape `YYYY-MM-DD HH:MM` with the month, day, and
//! hour components allowed to be one or two digits (`2024-1-5 8:00` is a
//! valid record in the observed data). The year is always four digits.
//! Digit-ness is the only check applied to the date components; month and
//! day ranges are deliberately not enforced, and everything after the hour
//! separator (minutes, seconds, timezone) is ignored.

/// Extract the hour component from a trimmed pickup timestamp
///
/// Returns `None` when the timestamp does not match the grammar or the
/// hour exceeds 23.
pub fn pickup_hour(timestamp: &str) -> Option<u8> {
    let bytes = timestamp.as_bytes();

    // Year: exactly four digits followed by '-'
    if bytes.len() < 5 {
        return None;
    }
    if !bytes[..4].iter().all(u8::is_ascii_digit) || bytes[4] != b'-' {
        return None;
    }

    let mut position = 5;
    read_component(bytes, &mut position, b'-')?; // month
    read_component(bytes, &mut position, b' ')?; // day
    let hour = read_component(bytes, &mut position, b':')?;

    if hour > 23 {
        return None;
    }
    Some(hour as u8)
}

/// Read a one- or two-digit component followed by the expected separator
///
/// Advances `position` past the separator on success.
fn read_component(bytes: &[u8], position: &mut usize, separator: u8) -> Option<u32> {
    let first = *bytes.get(*position)?;
    if !first.is_ascii_digit() {
        return None;
    }

    match bytes.get(*position + 1) {
        Some(&next) if next == separator => {
            *position += 2;
            Some(u32::from(first - b'0'))
        }
        Some(&next) if next.is_ascii_digit() => {
            if bytes.get(*position + 2) != Some(&separator) {
                return None;
            }
            *position += 3;
            Some(u32::from(first - b'0') * 10 + u32::from(next - b'0'))
        }
        _ => None,
    }
}
