//! Create business calendars with working hours and perform working time arithmetic.
//!
//! ### Basic usage
//!
//! The [`BusinessCalendar`] struct combines a [`WeeklySchedule`] of [`WorkingHours`] with a list
//! of holidays. The below constructs a calendar working from 05:00 to 21:00 on weekdays and
//! from 05:00 to 13:00 on Saturdays, observing New Year's Day 2000.
//!
//! ```rust
//! # use workhours::calendars::{BusinessCalendar, WeeklySchedule, WorkingHours, nd};
//! # use chrono::Weekday;
//! let weekday = WorkingHours::try_new(5.0, 21.0).unwrap();
//! let schedule = WeeklySchedule::new([
//!     (Weekday::Mon, weekday),
//!     (Weekday::Tue, weekday),
//!     (Weekday::Wed, weekday),
//!     (Weekday::Thu, weekday),
//!     (Weekday::Fri, weekday),
//!     (Weekday::Sat, WorkingHours::try_new(5.0, 13.0).unwrap()),
//! ]);
//! let cal = BusinessCalendar::try_new(schedule, vec![nd(2000, 1, 1)]).unwrap();
//! ```
//!
//! All calendars implement the [`WorkRoll`] trait, which measures working time between two
//! points and adds working time to a point, skipping nights, non-working weekdays and holidays.
//! Points in time are a [`DateOrTime`]: a date covers its whole day.
//!
//! ```rust
//! # use workhours::calendars::{BusinessCalendar, WeeklySchedule, WorkingHours, nd, DateOrTime, WorkRoll};
//! # use chrono::Weekday;
//! # let weekday = WorkingHours::try_new(5.0, 21.0).unwrap();
//! # let schedule = WeeklySchedule::new([
//! #     (Weekday::Mon, weekday), (Weekday::Tue, weekday), (Weekday::Wed, weekday),
//! #     (Weekday::Thu, weekday), (Weekday::Fri, weekday),
//! #     (Weekday::Sat, WorkingHours::try_new(5.0, 13.0).unwrap()),
//! # ]);
//! # let cal = BusinessCalendar::try_new(schedule, vec![nd(2000, 1, 1)]).unwrap();
//! let from: DateOrTime = "2000-02-22 14:00".parse().unwrap();
//! let to: DateOrTime = "2000-02-22 16:00".parse().unwrap();
//! assert_eq!(cal.working_hours_between(&from, &to), 2.0);
//!
//! // Friday evening, over the Saturday holiday, to Monday morning.
//! let start: DateOrTime = "1999-12-31 20:00".parse().unwrap();
//! let due = cal.add_working_hours(&start, 7.0).unwrap();
//! assert_eq!(DateOrTime::from(due), "2000-01-03 11:00".parse::<DateOrTime>().unwrap());
//! ```
//!
//! ### Configuration
//!
//! Calendars serialize to and from JSON through [`CalendarConfig`].
//!
//! ```rust
//! # use workhours::calendars::{BusinessCalendar, WorkRoll};
//! # use workhours::json::JSON;
//! let cal = BusinessCalendar::from_json(
//!     r#"{"working_hours": {"Mon": [9, 17], "Wed": "9..13"}, "holidays": ["2019-08-05"]}"#,
//! ).unwrap();
//! assert_eq!(cal.max_working_hours_in_a_day(), 8.0);
//! ```

mod business_calendar;
mod business_day;
mod error;
mod holidays;
pub(crate) mod instant;
mod schedule;
mod working_hours;
mod workroll;

mod serde;

#[cfg(feature = "python")]
pub(crate) mod py;

pub use crate::calendars::{
    business_calendar::{BusinessCalendar, CalendarConfig},
    business_day::BusinessDay,
    error::CalendarError,
    holidays::HolidaySet,
    instant::{nd, ndt, DateOrTime},
    schedule::{WeeklySchedule, DAYS_OF_THE_WEEK},
    working_hours::WorkingHours,
    workroll::WorkRoll,
};
