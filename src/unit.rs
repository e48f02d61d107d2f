//! Calendar granularities for date-time differences.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use crate::error::{DateTimeError, Result};

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_DAY: i128 = 86_400 * NANOS_PER_SECOND;

/// Granularity used when measuring the distance between two date-times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
    Eras,
}

impl Unit {
    /// Every supported unit, shortest first.
    pub const ALL: [Unit; 15] = [
        Unit::Nanos,
        Unit::Micros,
        Unit::Millis,
        Unit::Seconds,
        Unit::Minutes,
        Unit::Hours,
        Unit::HalfDays,
        Unit::Days,
        Unit::Weeks,
        Unit::Months,
        Unit::Years,
        Unit::Decades,
        Unit::Centuries,
        Unit::Millennia,
        Unit::Eras,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Unit::Nanos => "nanos",
            Unit::Micros => "micros",
            Unit::Millis => "millis",
            Unit::Seconds => "seconds",
            Unit::Minutes => "minutes",
            Unit::Hours => "hours",
            Unit::HalfDays => "half_days",
            Unit::Days => "days",
            Unit::Weeks => "weeks",
            Unit::Months => "months",
            Unit::Years => "years",
            Unit::Decades => "decades",
            Unit::Centuries => "centuries",
            Unit::Millennia => "millennia",
            Unit::Eras => "eras",
        }
    }

    /// Units with a fixed length in nanoseconds.
    pub fn is_time_based(self) -> bool {
        matches!(
            self,
            Unit::Nanos | Unit::Micros | Unit::Millis | Unit::Seconds | Unit::Minutes | Unit::Hours | Unit::HalfDays
        )
    }

    /// Whole units from `start` to `end`, truncated toward zero.
    ///
    /// Time-based units divide the elapsed nanoseconds. Date-based units
    /// count calendar days or months, where a day (or month) only counts once
    /// the end has reached the start's time of day (or day of month).
    pub fn between(self, start: &NaiveDateTime, end: &NaiveDateTime) -> Result<i64> {
        let amount = match self {
            Unit::Nanos => elapsed_nanos(start, end),
            Unit::Micros => elapsed_nanos(start, end) / 1_000,
            Unit::Millis => elapsed_nanos(start, end) / 1_000_000,
            Unit::Seconds => elapsed_nanos(start, end) / NANOS_PER_SECOND,
            Unit::Minutes => elapsed_nanos(start, end) / (60 * NANOS_PER_SECOND),
            Unit::Hours => elapsed_nanos(start, end) / (3_600 * NANOS_PER_SECOND),
            Unit::HalfDays => elapsed_nanos(start, end) / (NANOS_PER_DAY / 2),
            Unit::Days => days_between(start.date(), calendar_end(start, end)?),
            Unit::Weeks => days_between(start.date(), calendar_end(start, end)?) / 7,
            Unit::Months => months_between(start.date(), calendar_end(start, end)?),
            Unit::Years => months_between(start.date(), calendar_end(start, end)?) / 12,
            Unit::Decades => months_between(start.date(), calendar_end(start, end)?) / 120,
            Unit::Centuries => months_between(start.date(), calendar_end(start, end)?) / 1_200,
            Unit::Millennia => months_between(start.date(), calendar_end(start, end)?) / 12_000,
            Unit::Eras => era(calendar_end(start, end)?) - era(start.date()),
        };

        i64::try_from(amount).map_err(|_| {
            DateTimeError::Overflow(format!("{} between {} and {} does not fit in 64 bits", self, start, end))
        })
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = DateTimeError;

    /// Case-insensitive; accepts the canonical names, their long forms
    /// (`nanoseconds`, `milliseconds`, ...) and `-` in place of `_`.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        match key.as_str() {
            "" => Err(DateTimeError::missing("unit")),
            "nanos" | "nanoseconds" => Ok(Unit::Nanos),
            "micros" | "microseconds" => Ok(Unit::Micros),
            "millis" | "milliseconds" => Ok(Unit::Millis),
            "seconds" => Ok(Unit::Seconds),
            "minutes" => Ok(Unit::Minutes),
            "hours" => Ok(Unit::Hours),
            "half_days" | "halfdays" => Ok(Unit::HalfDays),
            "days" => Ok(Unit::Days),
            "weeks" => Ok(Unit::Weeks),
            "months" => Ok(Unit::Months),
            "years" => Ok(Unit::Years),
            "decades" => Ok(Unit::Decades),
            "centuries" => Ok(Unit::Centuries),
            "millennia" => Ok(Unit::Millennia),
            "eras" => Ok(Unit::Eras),
            _ => {
                let names: Vec<&str> = Unit::ALL.iter().map(|u| u.name()).collect();
                Err(DateTimeError::InvalidArgument(format!(
                    "unsupported unit '{}', expected one of: {}",
                    s,
                    names.join(", ")
                )))
            }
        }
    }
}

fn nano_of_day(time: &NaiveTime) -> i128 {
    i128::from(time.num_seconds_from_midnight()) * NANOS_PER_SECOND + i128::from(time.nanosecond())
}

fn elapsed_nanos(start: &NaiveDateTime, end: &NaiveDateTime) -> i128 {
    let days = i128::from(end.date().signed_duration_since(start.date()).num_days());
    days * NANOS_PER_DAY + nano_of_day(&end.time()) - nano_of_day(&start.time())
}

/// The end date, moved one day toward the start when the end's time of day
/// has not yet reached the start's.
fn calendar_end(start: &NaiveDateTime, end: &NaiveDateTime) -> Result<NaiveDate> {
    let (start_date, end_date) = (start.date(), end.date());
    let adjusted = if end_date > start_date && end.time() < start.time() {
        end_date.pred_opt()
    } else if end_date < start_date && end.time() > start.time() {
        end_date.succ_opt()
    } else {
        Some(end_date)
    };
    adjusted.ok_or_else(|| DateTimeError::Overflow(format!("{} is outside the supported date range", end)))
}

fn days_between(start: NaiveDate, end: NaiveDate) -> i128 {
    i128::from(end.signed_duration_since(start).num_days())
}

fn months_between(start: NaiveDate, end: NaiveDate) -> i128 {
    // 32 > any day of month, so the day only breaks ties within a month
    let packed = |d: NaiveDate| (i128::from(d.year()) * 12 + i128::from(d.month0())) * 32 + i128::from(d.day());
    (packed(end) - packed(start)) / 32
}

/// 1 for years of the common era, 0 before it.
fn era(date: NaiveDate) -> i128 {
    i128::from(date.year() >= 1)
}
