//! Input validation for user-entered clock times.
//!
//! This is the only place malformed time strings are rejected. The
//! arithmetic in [`crate::stats`] deliberately stays lenient and defaults
//! unparsable tokens to 0, so callers must gate input through
//! [`is_valid_time_format`] before constructing records.

/// Returns true if the string looks like `HH:mm` or `H:mm` with a valid
/// hour (0-23) and minute (0-59). Whitespace may stand in for the colon.
pub fn is_valid_time_format(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return false;
    }

    let mut tokens = trimmed.split(|c: char| c == ':' || c.is_whitespace());
    let (Some(hour_token), Some(minute_token)) = (tokens.next(), tokens.next()) else {
        return false;
    };

    let (Ok(hour), Ok(minute)) = (hour_token.parse::<i32>(), minute_token.parse::<i32>()) else {
        return false;
    };

    (0..=23).contains(&hour) && (0..=59).contains(&minute)
}
