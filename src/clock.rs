//! Wall-clock "HH:MM" strings and minutes since midnight.

use crate::error::{PlannerError, Result};

pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Parse "HH:MM" (hour may be a single digit) into minutes since midnight.
pub fn parse_time(input: &str) -> Result<i32> {
    let (hours, minutes) = input
        .split_once(':')
        .ok_or_else(|| PlannerError::invalid_time(input, "expected HH:MM"))?;

    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return Err(PlannerError::invalid_time(input, "expected HH:MM"));
    }
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(PlannerError::invalid_time(input, "non-digit character"));
    }

    let hours: i32 = hours
        .parse()
        .map_err(|_| PlannerError::invalid_time(input, "bad hour"))?;
    let minutes: i32 = minutes
        .parse()
        .map_err(|_| PlannerError::invalid_time(input, "bad minute"))?;

    if hours > 23 {
        return Err(PlannerError::invalid_time(input, "hour out of range"));
    }
    if minutes > 59 {
        return Err(PlannerError::invalid_time(input, "minute out of range"));
    }

    Ok(hours * 60 + minutes)
}

/// Format minutes as "HH:MM", wrapping across midnight in either direction.
pub fn format_time(total_minutes: i32) -> String {
    let normalized = total_minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", normalized / 60, normalized % 60)
}
