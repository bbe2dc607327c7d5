use crate::error::DateError;
use chrono::{DateTime, Datelike, Utc};

/// English ordinal suffix for a day of month.
pub fn day_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Renders e.g. `April 1st, 2025`.
pub fn format_reported_at(at: DateTime<Utc>) -> String {
    let day = at.day();
    format!("{} {}{}, {}", at.format("%B"), day, day_suffix(day), at.year())
}

/// Parses an RFC 3339 timestamp and renders it with [`format_reported_at`] in UTC.
pub fn format_date(input: &str) -> Result<String, DateError> {
    let at = DateTime::parse_from_rfc3339(input).map_err(|e| DateError::Invalid {
        input: input.to_string(),
        reason: e.to_string(),
    })?;
    Ok(format_reported_at(at.with_timezone(&Utc)))
}
