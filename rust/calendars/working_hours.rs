use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::calendars::instant::{hours_from_midnight, time_at_hours};
use crate::calendars::CalendarError;

/// The span of hours within a calendar day considered as working time.
///
/// Hours are real numbers measured from midnight, so `5.5` is half past five. A range that
/// closes at or before it opens is stored as [`WorkingHours::Empty`].
///
/// At clock resolution the interval is closed-open, `[begins_at, ends_at)`: the last working
/// instant is the second immediately before `ends_at`.
///
/// Deserialization applies the same checks as [`WorkingHours::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "WorkingHoursData", into = "WorkingHoursData")]
pub enum WorkingHours {
    /// No work on this day.
    #[default]
    Empty,
    /// Work between the two hour marks.
    Hours { begins_at: f64, ends_at: f64 },
}

/// Unvalidated serialized form of [`WorkingHours`].
#[derive(Serialize, Deserialize)]
enum WorkingHoursData {
    Empty,
    Hours { begins_at: f64, ends_at: f64 },
}

impl TryFrom<WorkingHoursData> for WorkingHours {
    type Error = CalendarError;

    fn try_from(data: WorkingHoursData) -> Result<Self, Self::Error> {
        match data {
            WorkingHoursData::Empty => Ok(WorkingHours::Empty),
            WorkingHoursData::Hours { begins_at, ends_at } => {
                WorkingHours::try_new(begins_at, ends_at)
            }
        }
    }
}

impl From<WorkingHours> for WorkingHoursData {
    fn from(wh: WorkingHours) -> Self {
        match wh {
            WorkingHours::Empty => WorkingHoursData::Empty,
            WorkingHours::Hours { begins_at, ends_at } => {
                WorkingHoursData::Hours { begins_at, ends_at }
            }
        }
    }
}

impl WorkingHours {
    /// Create working hours from a start and end hour.
    ///
    /// An end at or before midnight, or a zero-length range, yields [`WorkingHours::Empty`]. A
    /// reversed range or hours outside of `[0, 24]` are rejected.
    pub fn try_new(begins_at: f64, ends_at: f64) -> Result<Self, CalendarError> {
        if !begins_at.is_finite() || !ends_at.is_finite() {
            return Err(CalendarError::invalid_spec(format!("{begins_at}..{ends_at}")));
        }
        if ends_at <= 0.0 || ends_at == begins_at {
            return Ok(WorkingHours::Empty);
        }
        if begins_at > ends_at || begins_at < 0.0 || ends_at > 24.0 {
            return Err(CalendarError::invalid_spec(format!("{begins_at}..{ends_at}")));
        }
        Ok(WorkingHours::Hours {
            begins_at,
            ends_at,
        })
    }

    /// Parse a single weekday entry of a working hours configuration.
    ///
    /// Accepts an absent entry or `null`, a two element array `[start, end]` or a string range
    /// `"start..end"`.
    pub fn parse(spec: Option<&Value>) -> Result<Self, CalendarError> {
        match spec {
            None | Some(Value::Null) => Ok(WorkingHours::Empty),
            Some(Value::Array(arr)) => match arr.as_slice() {
                [Value::Number(b), Value::Number(e)] => {
                    match (b.as_f64(), e.as_f64()) {
                        (Some(b), Some(e)) => WorkingHours::try_new(b, e),
                        _ => Err(CalendarError::invalid_spec(Value::Array(arr.clone()))),
                    }
                }
                _ => Err(CalendarError::invalid_spec(Value::Array(arr.clone()))),
            },
            Some(Value::String(s)) => {
                let parts: Vec<&str> = s.split("..").collect();
                if parts.len() != 2 {
                    return Err(CalendarError::invalid_spec(format!("{s:?}")));
                }
                match (parts[0].trim().parse::<f64>(), parts[1].trim().parse::<f64>()) {
                    (Ok(b), Ok(e)) => WorkingHours::try_new(b, e),
                    _ => Err(CalendarError::invalid_spec(format!("{s:?}"))),
                }
            }
            Some(v) => Err(CalendarError::invalid_spec(v)),
        }
    }

    /// Returns whether there is no working time on the day.
    pub fn is_empty(&self) -> bool {
        match self {
            WorkingHours::Empty => true,
            WorkingHours::Hours { begins_at, ends_at } => ends_at <= begins_at,
        }
    }

    /// The opening hour, `0` for an empty day.
    pub fn begins_at(&self) -> f64 {
        match self {
            WorkingHours::Empty => 0.0,
            WorkingHours::Hours { begins_at, .. } => *begins_at,
        }
    }

    /// The closing hour, `0` for an empty day.
    pub fn ends_at(&self) -> f64 {
        match self {
            WorkingHours::Empty => 0.0,
            WorkingHours::Hours { ends_at, .. } => *ends_at,
        }
    }

    /// The number of working hours, optionally clipped to a window of hours of the same day.
    ///
    /// Never negative. An empty day always yields zero.
    pub fn quantity(&self, from: Option<f64>, to: Option<f64>) -> f64 {
        match self {
            WorkingHours::Empty => 0.0,
            WorkingHours::Hours { begins_at, ends_at } => {
                let start = from.map_or(*begins_at, |f| f.max(*begins_at));
                let end = to.map_or(*ends_at, |t| t.min(*ends_at));
                (end - start).max(0.0)
            }
        }
    }

    /// The first working clock time of the day.
    pub fn opening_time(&self) -> Option<NaiveTime> {
        if self.is_empty() {
            return None;
        }
        Some(time_at_hours(self.begins_at()))
    }

    /// The last working clock second of the day, one second before `ends_at`.
    pub fn closing_time(&self) -> Option<NaiveTime> {
        if self.is_empty() {
            return None;
        }
        let secs = (self.ends_at() * 3600.0).round() as u32;
        NaiveTime::from_num_seconds_from_midnight_opt(secs.saturating_sub(1).min(86_399), 0)
    }

    /// Returns whether the clock time falls within the working interval.
    pub fn contains(&self, time: &NaiveTime) -> bool {
        match (self.opening_time(), self.closing_time()) {
            (Some(open), Some(close)) => open <= *time && *time <= close,
            _ => false,
        }
    }

    /// Returns whether the clock time is strictly before the opening of a working day.
    pub fn starts_after(&self, time: &NaiveTime) -> bool {
        self.opening_time().is_some_and(|open| *time < open)
    }

    /// Returns whether the clock time is strictly after the last working second of a working day.
    pub fn ends_before(&self, time: &NaiveTime) -> bool {
        self.closing_time().is_some_and(|close| *time > close)
    }

    /// The working quantity left on the day from the given clock time onwards.
    pub fn remaining_from(&self, time: &NaiveTime) -> f64 {
        self.quantity(Some(hours_from_midnight(time)), None)
    }
}
