//! Date and time utility functions
//!
//! This module provides the formatting, parsing and difference helpers for
//! local (zone-less) date-times. Custom layouts use letter-based patterns,
//! see [`crate::pattern`].

use chrono::NaiveDateTime;
use log::debug;

use crate::error::{DateTimeError, Result};
use crate::pattern::Pattern;
use crate::unit::Unit;

/// Pattern rendered by [`format_default`]
pub const DEFAULT_DISPLAY_PATTERN: &str = "MM/dd/yyyy HH:mm";

/// chrono equivalent of [`DEFAULT_DISPLAY_PATTERN`]
const DISPLAY_FORMAT: &str = "%m/%d/%Y %H:%M";

/// ISO-8601 local date-time without seconds (yyyy-MM-ddTHH:mm)
pub const ISO_MINUTES_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// ISO-8601 local date-time with seconds (yyyy-MM-ddTHH:mm:ss)
pub const ISO_SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// Digit positions are marked with '0'
const ISO_MINUTES_SHAPE: &str = "0000-00-00T00:00";
const ISO_SECONDS_SHAPE: &str = "0000-00-00T00:00:00";

/// Format a date-time as month/day/year hour:minute (MM/dd/yyyy HH:mm)
///
/// # Arguments
/// * `date` - Date-time to format
///
/// # Returns
/// * `String` - e.g. `03/07/2024 09:05`
pub fn format_default(date: &NaiveDateTime) -> String {
    let text = date.format(DISPLAY_FORMAT).to_string();
    debug!("format_default({}) -> '{}'", date, text);
    text
}

/// Format a date-time according to a pattern such as `yyyy/MM/dd`,
/// `HH:mm` or `MM-dd HH:mm`
///
/// # Arguments
/// * `date` - Date-time to format
/// * `pattern` - Letter-based date-time pattern
///
/// # Returns
/// * `Result<String>` - Formatted text, or `InvalidPattern` if the pattern
///   does not compile
pub fn format_with_pattern(date: &NaiveDateTime, pattern: &str) -> Result<String> {
    let compiled = Pattern::compile(pattern)?;
    let text = compiled.format(date);
    debug!("format_with_pattern({}, '{}') -> '{}'", date, pattern, text);
    Ok(text)
}

/// Parse an ISO-8601 local date-time
///
/// Two layouts are accepted:
/// * `yyyy-MM-ddTHH:mm` (seconds default to 0)
/// * `yyyy-MM-ddTHH:mm:ss`
///
/// # Arguments
/// * `text` - Date-time string
///
/// # Returns
/// * `Result<NaiveDateTime>` - Parsed value, `InvalidArgument` for empty
///   input or `Parse` when the text matches neither layout
pub fn parse_default(text: &str) -> Result<NaiveDateTime> {
    if text.is_empty() {
        return Err(DateTimeError::missing("date string"));
    }

    let format = if matches_shape(text, ISO_MINUTES_SHAPE) {
        ISO_MINUTES_FORMAT
    } else if matches_shape(text, ISO_SECONDS_SHAPE) {
        ISO_SECONDS_FORMAT
    } else {
        debug!("parse_default('{}') rejected: unknown layout", text);
        return Err(DateTimeError::Parse(format!(
            "'{}' is not in yyyy-MM-ddTHH:mm or yyyy-MM-ddTHH:mm:ss format",
            text
        )));
    };

    let date = NaiveDateTime::parse_from_str(text, format)
        .map_err(|e| DateTimeError::Parse(format!("'{}' is not a valid date-time: {}", text, e)))?;
    debug!("parse_default('{}') -> {}", text, date);
    Ok(date)
}

/// Parse a date-time with a custom pattern
///
/// # Arguments
/// * `text` - Date-time string
/// * `pattern` - Letter-based date-time pattern the text is written in
///
/// # Returns
/// * `Result<NaiveDateTime>` - Parsed value; `InvalidArgument` for empty
///   input, `InvalidPattern` for a bad pattern, `Parse` when the text does
///   not conform
pub fn parse_with_pattern(text: &str, pattern: &str) -> Result<NaiveDateTime> {
    if text.is_empty() {
        return Err(DateTimeError::missing("date string"));
    }

    let date = Pattern::compile(pattern)?.parse(text)?;
    debug!("parse_with_pattern('{}', '{}') -> {}", text, pattern, date);
    Ok(date)
}

/// Calculate `end - start` in whole units, truncated toward zero
///
/// # Arguments
/// * `start` - Starting date-time
/// * `end` - Ending date-time
/// * `unit` - Granularity of the result
///
/// # Returns
/// * `Result<i64>` - Negative when `end` precedes `start`; `Overflow` if the
///   count does not fit in an `i64`
pub fn diff(start: &NaiveDateTime, end: &NaiveDateTime, unit: Unit) -> Result<i64> {
    let amount = unit.between(start, end)?;
    debug!("diff({}, {}, {}) -> {}", start, end, unit, amount);
    Ok(amount)
}

fn matches_shape(text: &str, shape: &str) -> bool {
    text.len() == shape.len()
        && text
            .bytes()
            .zip(shape.bytes())
            .all(|(t, s)| if s == b'0' { t.is_ascii_digit() } else { t == s })
}
