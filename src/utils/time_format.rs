//! Time formatting utilities.
//!
//! This module converts between second counts and the human readable forms
//! used on screen (`HH:MM:SS`) and on the command line (`1h30m`, `90s`).

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;

/// Format a second count as `HH:MM:SS`.
///
/// Hours are not wrapped at a day boundary, so a countdown of 25 hours reads
/// `25:00:00`.
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Parse a duration such as `90`, `90s`, `10m`, `1h30m` or `1h2m3s` into
/// seconds. A bare number is read as seconds.
///
/// Returns `None` for empty input, unknown units, repeated units or overflow.
pub fn parse_duration(input: &str) -> Option<u64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(seconds) = input.parse::<u64>() {
        return Some(seconds);
    }

    let mut total: u64 = 0;
    let mut digits = String::new();
    let mut seen_units = Vec::new();
    for c in input.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let unit = c.to_ascii_lowercase();
        let factor = match unit {
            'h' => SECONDS_PER_HOUR,
            'm' => SECONDS_PER_MINUTE,
            's' => 1,
            _ => return None,
        };
        if digits.is_empty() || seen_units.contains(&unit) {
            return None;
        }
        seen_units.push(unit);
        let amount: u64 = digits.parse().ok()?;
        total = total.checked_add(amount.checked_mul(factor)?)?;
        digits.clear();
    }

    // Trailing digits without a unit ("1m30") are ambiguous
    if !digits.is_empty() {
        return None;
    }
    Some(total)
}
