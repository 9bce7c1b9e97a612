use chrono::prelude::*;

use crate::calendars::instant::hours_from_midnight;
use crate::calendars::WorkingHours;

/// A specific calendar date paired with its effective working hours.
///
/// Produced on demand by [`WorkRoll::business_day`](crate::calendars::WorkRoll::business_day)
/// after holidays have been applied; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusinessDay {
    pub date: NaiveDate,
    pub working_hours: WorkingHours,
}

impl BusinessDay {
    pub fn new(date: NaiveDate, working_hours: WorkingHours) -> Self {
        Self {
            date,
            working_hours,
        }
    }

    /// Returns whether the day has any working time.
    pub fn is_working_day(&self) -> bool {
        !self.working_hours.is_empty()
    }

    /// The working quantity of the day, clipped to timestamps falling on this date.
    ///
    /// A bound on another date does not clip.
    pub fn number_of_working_hours(
        &self,
        from: Option<&NaiveDateTime>,
        to: Option<&NaiveDateTime>,
    ) -> f64 {
        let from = from
            .filter(|t| self.same_day(t))
            .map(|t| hours_from_midnight(&t.time()));
        let to = to
            .filter(|t| self.same_day(t))
            .map(|t| hours_from_midnight(&t.time()));
        self.working_hours.quantity(from, to)
    }

    pub fn same_day(&self, timestamp: &NaiveDateTime) -> bool {
        timestamp.date() == self.date
    }

    /// Returns whether the timestamp is a working instant of this day.
    pub fn include(&self, timestamp: &NaiveDateTime) -> bool {
        self.same_day(timestamp) && self.working_hours.contains(&timestamp.time())
    }

    /// Returns whether the timestamp is on this day, before work begins.
    pub fn starts_after(&self, timestamp: &NaiveDateTime) -> bool {
        self.same_day(timestamp) && self.working_hours.starts_after(&timestamp.time())
    }

    /// Returns whether the timestamp is on this day, after the last working second.
    pub fn ends_before(&self, timestamp: &NaiveDateTime) -> bool {
        self.same_day(timestamp) && self.working_hours.ends_before(&timestamp.time())
    }

    /// The first working instant of the day, if it is a working day.
    pub fn at_beginning(&self) -> Option<NaiveDateTime> {
        self.working_hours
            .opening_time()
            .map(|t| self.date.and_time(t))
    }

    /// The last working instant of the day, if it is a working day.
    pub fn at_end(&self) -> Option<NaiveDateTime> {
        self.working_hours
            .closing_time()
            .map(|t| self.date.and_time(t))
    }
}
