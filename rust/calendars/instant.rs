use chrono::prelude::*;
use chrono::{Days, TimeDelta};
#[cfg(feature = "python")]
use pyo3::{FromPyObject, IntoPyObject};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::calendars::CalendarError;

/// Create a `NaiveDateTime` with default null time.
///
/// Panics if date values are invalid.
pub fn ndt(year: i32, month: u32, day: u32) -> NaiveDateTime {
    nd(year, month, day).and_hms_opt(0, 0, 0).unwrap()
}

/// Create a `NaiveDate`.
///
/// Panics if date values are invalid.
pub fn nd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month` `day` are invalid.")
}

/// Either a calendar date, covering the whole day, or a precise timestamp.
///
/// Operations that return a point in time preserve the variant of their input, so a date given to
/// [`WorkRoll::roll_forward`](crate::calendars::WorkRoll::roll_forward) comes back as a date.
///
/// The `Time` variant is declared first so that Python `datetime` objects, which are also `date`
/// instances, are not truncated when extracted.
#[cfg_attr(feature = "python", derive(FromPyObject, IntoPyObject))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DateOrTime {
    Time(NaiveDateTime),
    Date(NaiveDate),
}

impl From<NaiveDate> for DateOrTime {
    fn from(item: NaiveDate) -> Self {
        DateOrTime::Date(item)
    }
}

impl From<NaiveDateTime> for DateOrTime {
    fn from(item: NaiveDateTime) -> Self {
        DateOrTime::Time(item)
    }
}

impl DateOrTime {
    /// The calendar date component.
    pub fn date(&self) -> NaiveDate {
        match self {
            DateOrTime::Time(t) => t.date(),
            DateOrTime::Date(d) => *d,
        }
    }

    /// Returns whether the value carries no time component.
    pub fn is_date(&self) -> bool {
        matches!(self, DateOrTime::Date(_))
    }

    /// The timestamp used when the value is the lower bound of a range.
    ///
    /// A date maps to the first instant of that day.
    pub fn start(&self) -> NaiveDateTime {
        match self {
            DateOrTime::Time(t) => *t,
            DateOrTime::Date(d) => beginning_of_day(d),
        }
    }

    /// The timestamp used when the value is the upper bound of a range.
    ///
    /// A date maps to the last representable instant of that day.
    pub fn end(&self) -> NaiveDateTime {
        match self {
            DateOrTime::Time(t) => *t,
            DateOrTime::Date(d) => end_of_day(d),
        }
    }
}

impl FromStr for DateOrTime {
    type Err = CalendarError;

    /// Parse `YYYY-MM-DD` as a date and `YYYY-MM-DD HH:MM[:SS]` as a timestamp.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(DateOrTime::Date(d));
        }
        for fmt in [
            "%Y-%m-%d %H:%M:%S",
            "%Y-%m-%d %H:%M",
            "%Y-%m-%dT%H:%M:%S",
            "%Y-%m-%dT%H:%M",
        ] {
            if let Ok(t) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(DateOrTime::Time(t));
            }
        }
        Err(CalendarError::UnsupportedInstantType {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for DateOrTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateOrTime::Time(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M:%S")),
            DateOrTime::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

pub(crate) fn beginning_of_day(date: &NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub(crate) fn end_of_day(date: &NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap())
}

pub(crate) fn tomorrow(date: &NaiveDate) -> Result<NaiveDate, CalendarError> {
    date.checked_add_days(Days::new(1))
        .ok_or(CalendarError::DateOutOfRange { date: *date })
}

pub(crate) fn yesterday(date: &NaiveDate) -> Result<NaiveDate, CalendarError> {
    date.checked_sub_days(Days::new(1))
        .ok_or(CalendarError::DateOutOfRange { date: *date })
}

/// Fractional hours elapsed since midnight.
pub(crate) fn hours_from_midnight(time: &NaiveTime) -> f64 {
    time.num_seconds_from_midnight() as f64 / 3600.0 + time.nanosecond() as f64 / 3.6e12
}

/// Convert a quantity of hours to a duration, to the nearest millisecond.
pub(crate) fn hours_to_delta(hours: f64) -> TimeDelta {
    TimeDelta::milliseconds((hours * 3_600_000.0).round() as i64)
}

/// The clock time at a fractional hour of the day, to the nearest second.
///
/// Values at or beyond 24 saturate to the last second of the day.
pub(crate) fn time_at_hours(hours: f64) -> NaiveTime {
    let secs = (hours * 3600.0).round().clamp(0.0, 86_399.0) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap()
}
