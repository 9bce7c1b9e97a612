use chrono::prelude::*;
use indexmap::IndexMap;
#[cfg(feature = "python")]
use pyo3::pyclass;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::calendars::{CalendarError, HolidaySet, WeeklySchedule, WorkRoll, WorkingHours};

/// A business calendar formed of a weekly schedule of working hours and a list of holidays.
///
/// A business calendar is formed of 2 components:
///
/// - `working_hours`: the [`WorkingHours`] of each day of the week. At least one weekday must
///   have a positive working quantity.
/// - `holidays`: specific dates that are exceptions to the working week and have no working
///   hours at all.
///
/// The calendar is immutable once constructed and can be shared between threads for reading.
#[cfg_attr(feature = "python", pyclass(module = "workhours.rs"))]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CalendarConfig", into = "CalendarConfig")]
pub struct BusinessCalendar {
    pub(crate) working_hours: WeeklySchedule,
    pub(crate) holidays: HolidaySet,
    max_working_hours: f64,
}

impl BusinessCalendar {
    /// Create a business calendar.
    ///
    /// *Raises* if no weekday has a positive working quantity.
    pub fn try_new(
        working_hours: WeeklySchedule,
        holidays: Vec<NaiveDate>,
    ) -> Result<Self, CalendarError> {
        if working_hours.working_days() == 0 {
            return Err(CalendarError::NoWorkingDayConfigured);
        }
        let holidays = HolidaySet::new(holidays);
        let max_working_hours = working_hours.max_quantity();
        debug!(
            working_days = working_hours.working_days(),
            holidays = holidays.len(),
            max_working_hours,
            "created business calendar"
        );
        Ok(BusinessCalendar {
            working_hours,
            holidays,
            max_working_hours,
        })
    }

    /// Create a business calendar from its serializable configuration.
    pub fn try_from_config(config: &CalendarConfig) -> Result<Self, CalendarError> {
        let schedule =
            WeeklySchedule::try_from_labels(&config.working_hours, config.default_hours.as_ref())?;
        Self::try_new(schedule, config.holidays.clone())
    }

    /// The regular working hours of every weekday.
    pub fn working_hours(&self) -> &WeeklySchedule {
        &self.working_hours
    }

    /// The specific holidays of the calendar.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }
}

impl WorkRoll for BusinessCalendar {
    fn weekly_hours(&self, weekday: &Weekday) -> WorkingHours {
        self.working_hours.get(weekday)
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.holidays.contains(date)
    }

    fn max_working_hours_in_a_day(&self) -> f64 {
        self.max_working_hours
    }
}

/// The serializable construction surface of a [`BusinessCalendar`].
///
/// `working_hours` maps weekday labels, e.g. `"Mon"`, to `[start, end]`, `"start..end"` or
/// `null`. `default_hours` applies to every weekday without a labelled entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub working_hours: IndexMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_hours: Option<Value>,
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
}

impl TryFrom<CalendarConfig> for BusinessCalendar {
    type Error = CalendarError;

    fn try_from(config: CalendarConfig) -> Result<Self, Self::Error> {
        BusinessCalendar::try_from_config(&config)
    }
}

impl From<BusinessCalendar> for CalendarConfig {
    fn from(cal: BusinessCalendar) -> Self {
        CalendarConfig {
            working_hours: cal.working_hours.to_labels(),
            default_hours: None,
            holidays: cal.holidays.sorted(),
        }
    }
}
