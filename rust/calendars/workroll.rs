use chrono::prelude::*;
use tracing::{trace, warn};

use crate::calendars::instant::{
    beginning_of_day, end_of_day, hours_to_delta, tomorrow, yesterday,
};
use crate::calendars::{BusinessDay, CalendarError, DateOrTime, WorkingHours};

/// Working time arithmetic over a weekly schedule with holiday exceptions.
///
/// Implementors supply the weekly hours, the holiday test and the length of the longest working
/// day. Every other operation is provided.
///
/// The traversal loops terminate only if at least one weekday has a positive working quantity,
/// which [`BusinessCalendar`](crate::calendars::BusinessCalendar) enforces on construction.
pub trait WorkRoll {
    /// Returns the regular working hours of the weekday, ignoring holidays.
    fn weekly_hours(&self, weekday: &Weekday) -> WorkingHours;

    /// Returns whether the date is a specific holiday excluded from the regular working week.
    fn is_holiday(&self, date: &NaiveDate) -> bool;

    /// The working quantity of the longest weekday, used as the length of one working day.
    fn max_working_hours_in_a_day(&self) -> f64;

    /// Returns the effective working hours of `date`, which are empty on a holiday.
    fn business_day(&self, date: &NaiveDate) -> BusinessDay {
        if self.is_holiday(date) {
            BusinessDay::new(*date, WorkingHours::Empty)
        } else {
            BusinessDay::new(*date, self.weekly_hours(&date.weekday()))
        }
    }

    /// Returns whether the date has any working time after applying holidays.
    fn is_working_day(&self, date: &NaiveDate) -> bool {
        self.business_day(date).is_working_day()
    }

    /// Returns whether the date component of `date` is a holiday.
    fn holiday(&self, date: &DateOrTime) -> bool {
        self.is_holiday(&date.date())
    }

    /// Return the number of working hours between two points in time, rounded to 2 decimals.
    ///
    /// A date given as `from` counts from the beginning of that day, and a date given as `to`
    /// counts to its end. If `from` is after `to` the result is negated.
    fn working_hours_between(&self, from: &DateOrTime, to: &DateOrTime) -> f64 {
        let (from, to, sign) = invert_if_needed(from.start(), to.end());
        let total: f64 = from
            .date()
            .iter_days()
            .take_while(|d| *d <= to.date())
            .map(|d| {
                self.business_day(&d)
                    .number_of_working_hours(Some(&from), Some(&to))
            })
            .sum();
        (total * 100.0).round() / 100.0 * sign
    }

    /// Return the number of working days between two points in time, including the fractional
    /// part, measuring a day as [`max_working_hours_in_a_day`](WorkRoll::max_working_hours_in_a_day).
    fn working_days_between(&self, from: &DateOrTime, to: &DateOrTime) -> f64 {
        self.working_hours_between(from, to) / self.max_working_hours_in_a_day()
    }

    /// Return `date` if it is within working hours, otherwise the beginning of the next working
    /// period.
    ///
    /// A date is returned unchanged if it is a working day, or else rolled to the next one.
    ///
    /// *Raises* if no working period exists before the last representable date.
    fn roll_forward(&self, date: &DateOrTime) -> Result<DateOrTime, CalendarError> {
        match date {
            DateOrTime::Date(d) => {
                let mut new_date = *d;
                while !self.is_working_day(&new_date) {
                    new_date = tomorrow(&new_date)?;
                }
                Ok(DateOrTime::Date(new_date))
            }
            DateOrTime::Time(t) => Ok(DateOrTime::Time(self.roll_forward_time(t)?)),
        }
    }

    /// Return `date` if it is within working hours, otherwise the end of the previous working
    /// period.
    ///
    /// A date is returned unchanged if it is a working day, or else rolled to the previous one.
    ///
    /// *Raises* if no working period exists after the first representable date.
    fn roll_backward(&self, date: &DateOrTime) -> Result<DateOrTime, CalendarError> {
        match date {
            DateOrTime::Date(d) => {
                let mut new_date = *d;
                while !self.is_working_day(&new_date) {
                    new_date = yesterday(&new_date)?;
                }
                Ok(DateOrTime::Date(new_date))
            }
            DateOrTime::Time(t) => Ok(DateOrTime::Time(self.roll_backward_time(t)?)),
        }
    }

    /// Timestamp form of [`roll_forward`](WorkRoll::roll_forward).
    fn roll_forward_time(&self, timestamp: &NaiveDateTime) -> Result<NaiveDateTime, CalendarError> {
        let mut new_time = *timestamp;
        loop {
            let bday = self.business_day(&new_time.date());
            if bday.include(&new_time) {
                return Ok(new_time);
            }
            if bday.starts_after(&new_time) {
                if let Some(start) = bday.at_beginning() {
                    return Ok(start);
                }
            }
            new_time = beginning_of_day(&tomorrow(&new_time.date())?);
        }
    }

    /// Timestamp form of [`roll_backward`](WorkRoll::roll_backward).
    fn roll_backward_time(
        &self,
        timestamp: &NaiveDateTime,
    ) -> Result<NaiveDateTime, CalendarError> {
        let mut new_time = *timestamp;
        loop {
            let bday = self.business_day(&new_time.date());
            if bday.include(&new_time) {
                return Ok(new_time);
            }
            if bday.ends_before(&new_time) {
                if let Some(end) = bday.at_end() {
                    return Ok(end);
                }
            }
            new_time = end_of_day(&yesterday(&new_time.date())?);
        }
    }

    /// Return the next working day after a date, or the beginning of the next working period
    /// starting no earlier than the day after a timestamp.
    fn next_working_day(&self, date: &DateOrTime) -> Result<DateOrTime, CalendarError> {
        match date {
            DateOrTime::Date(d) => self.roll_forward(&DateOrTime::Date(tomorrow(d)?)),
            DateOrTime::Time(t) => Ok(DateOrTime::Time(
                self.roll_forward_time(&beginning_of_day(&tomorrow(&t.date())?))?,
            )),
        }
    }

    /// Return the previous working day before a date, or the end of the last working period
    /// finishing no later than the day before a timestamp.
    fn prev_working_day(&self, date: &DateOrTime) -> Result<DateOrTime, CalendarError> {
        match date {
            DateOrTime::Date(d) => self.roll_backward(&DateOrTime::Date(yesterday(d)?)),
            DateOrTime::Time(t) => Ok(DateOrTime::Time(
                self.roll_backward_time(&end_of_day(&yesterday(&t.date())?))?,
            )),
        }
    }

    /// Add a number of working hours to a point in time.
    ///
    /// The start is first rolled forward to a working instant, and a date starts at the
    /// beginning of that day. A result falling exactly on the close of a working day is reported
    /// as the beginning of the next working period.
    ///
    /// *Raises* if `number_of_hours` is negative or not finite, or if the result would fall after
    /// the last representable date.
    fn add_working_hours(
        &self,
        to: &DateOrTime,
        number_of_hours: f64,
    ) -> Result<NaiveDateTime, CalendarError> {
        if !number_of_hours.is_finite() || number_of_hours < 0.0 {
            return Err(CalendarError::InvalidArgument {
                name: "number_of_hours",
                value: number_of_hours,
            });
        }
        let mut rolling = self.roll_forward_time(&to.start())?;
        let mut remaining = number_of_hours;

        loop {
            let bday = self.business_day(&rolling.date());
            let candidate = rolling.checked_add_signed(hours_to_delta(remaining));
            if let Some(c) = candidate.filter(|c| bday.include(c)) {
                return Ok(c);
            }
            let capacity = bday.working_hours.remaining_from(&rolling.time());
            if remaining < capacity - 1e-9 {
                // the landing point is inside the day yet not a working instant
                warn!(%rolling, remaining, capacity, "working hours overshoot the day capacity");
                return Ok(candidate.unwrap_or(rolling));
            }
            remaining = (remaining - capacity).max(0.0);
            rolling = self.roll_forward_time(&beginning_of_day(&tomorrow(&rolling.date())?))?;
            trace!(%rolling, remaining, "rolled to next working day");
        }
    }

    /// Add a number of working days to a point in time.
    ///
    /// This adds `number_of_days` multiplied by
    /// [`max_working_hours_in_a_day`](WorkRoll::max_working_hours_in_a_day) working hours. With
    /// irregular schedules shorter days therefore count as fractions of a day, and more calendar
    /// days are traversed than there are working days requested.
    ///
    /// A date input returns the date of the result, a timestamp input returns the timestamp.
    ///
    /// *Raises* if `number_of_days` is negative or not finite.
    fn add_working_days(
        &self,
        to: &DateOrTime,
        number_of_days: f64,
    ) -> Result<DateOrTime, CalendarError> {
        if !number_of_days.is_finite() || number_of_days < 0.0 {
            return Err(CalendarError::InvalidArgument {
                name: "number_of_days",
                value: number_of_days,
            });
        }
        let result =
            self.add_working_hours(to, number_of_days * self.max_working_hours_in_a_day())?;
        match to {
            DateOrTime::Date(_) => Ok(DateOrTime::Date(result.date())),
            DateOrTime::Time(_) => Ok(DateOrTime::Time(result)),
        }
    }

    /// Return the working quantity of a date as a fraction of the longest working day.
    fn working_hours_percentage(&self, date: &NaiveDate) -> f64 {
        self.business_day(date).number_of_working_hours(None, None)
            / self.max_working_hours_in_a_day()
    }

    /// Return the working days within an inclusive range of dates.
    fn working_date_range(&self, start: &NaiveDate, end: &NaiveDate) -> Vec<NaiveDate> {
        start
            .iter_days()
            .take_while(|d| d <= end)
            .filter(|d| self.is_working_day(d))
            .collect()
    }
}

fn invert_if_needed(
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> (NaiveDateTime, NaiveDateTime, f64) {
    if from > to {
        (to, from, -1.0)
    } else {
        (from, to, 1.0)
    }
}
